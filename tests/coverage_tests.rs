#![allow(clippy::manual_assert)]
//! Coverage tests for chunking real source files.
//!
//! These tests parse actual code with the bundled grammars and verify that
//! chunk records cover every non-blank line, stay in source order, and
//! respect the split budget wherever the syntax allows it.

use codeslabs::{Chunk, Chunker, ChunkerConfig, CodeChunker, LanguageRegistry, SourceFile};

const RUST: &str = r#"use std::collections::HashMap;
use std::io::{self, BufRead};

/// Word frequencies read from stdin.
pub struct Frequencies {
    counts: HashMap<String, usize>,
}

impl Frequencies {
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut counts = HashMap::new();
        for line in reader.lines() {
            for word in line?.split_whitespace() {
                *counts.entry(word.to_lowercase()).or_insert(0) += 1;
            }
        }
        Ok(Self { counts })
    }

    pub fn top(&self, n: usize) -> Vec<(&str, usize)> {
        let mut pairs: Vec<_> = self.counts.iter().map(|(w, c)| (w.as_str(), *c)).collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        pairs.truncate(n);
        pairs
    }
}

fn main() -> io::Result<()> {
    let freq = Frequencies::from_reader(io::stdin().lock())?;
    for (word, count) in freq.top(10) {
        println!("{count:>6} {word}");
    }
    Ok(())
}
"#;

const PYTHON: &str = r#"import json
import os


class Config:
    """Settings loaded from disk."""

    def __init__(self, path):
        self.path = path
        self.values = {}

    def load(self):
        if not os.path.exists(self.path):
            return self
        with open(self.path) as f:
            self.values = json.load(f)
        return self

    def get(self, key, default=None):
        return self.values.get(key, default)


def main():
    config = Config("settings.json").load()
    print(config.get("name", "unknown"))


if __name__ == "__main__":
    main()
"#;

const TYPESCRIPT: &str = r#"interface User {
  id: number;
  name: string;
}

export class UserStore {
  private users = new Map<number, User>();

  add(user: User): void {
    this.users.set(user.id, user);
  }

  find(id: number): User | undefined {
    return this.users.get(id);
  }
}

export const greet = (user: User): string => `Hello, ${user.name}!`;
"#;

const GO: &str = r#"package main

import "fmt"

type Stack struct {
	items []int
}

func (s *Stack) Push(v int) {
	s.items = append(s.items, v)
}

func (s *Stack) Pop() (int, bool) {
	if len(s.items) == 0 {
		return 0, false
	}
	v := s.items[len(s.items)-1]
	s.items = s.items[:len(s.items)-1]
	return v, true
}

func main() {
	s := &Stack{}
	s.Push(1)
	fmt.Println(s.Pop())
}
"#;

fn chunk(name: &str, content: &str, max_chars: usize) -> Vec<Chunk> {
    let registry = LanguageRegistry::with_defaults();
    let config = ChunkerConfig::default().with_max_chars(max_chars);
    let chunker = CodeChunker::new(&registry, config).unwrap();
    chunker.chunk(&SourceFile::new(name, content))
}

/// Every non-blank line must appear in a chunk whose range contains it.
fn covers_non_blank_lines(chunks: &[Chunk], content: &str) -> bool {
    content.lines().enumerate().all(|(i, line)| {
        let line_no = i + 1;
        line.trim().is_empty()
            || chunks.iter().any(|c| {
                c.start_line <= line_no && line_no <= c.end_line && c.content.contains(line.trim())
            })
    })
}

fn in_source_order(chunks: &[Chunk]) -> bool {
    chunks.windows(2).all(|w| {
        w[0].chunk_index < w[1].chunk_index && w[0].end_line <= w[1].start_line
    })
}

#[test]
fn all_languages_cover_non_blank_lines() {
    let files = [
        ("src/main.rs", RUST),
        ("config.py", PYTHON),
        ("store.ts", TYPESCRIPT),
        ("stack.go", GO),
    ];

    for (name, content) in files {
        for max_chars in [80, 200, 1500] {
            let chunks = chunk(name, content, max_chars);
            assert!(!chunks.is_empty(), "{name} produced no chunks");
            assert!(
                covers_non_blank_lines(&chunks, content),
                "{name} lost lines at max_chars={max_chars}"
            );
            assert!(in_source_order(&chunks), "{name} out of order at max_chars={max_chars}");
        }
    }
}

#[test]
fn chunks_are_trimmed_and_non_empty() {
    for chunk in chunk("config.py", PYTHON, 120) {
        assert!(!chunk.content.is_empty());
        assert_eq!(chunk.content, chunk.content.trim());
        assert_eq!(chunk.original_file, "config.py");
    }
}

#[test]
fn smaller_budget_gives_more_chunks() {
    let coarse = chunk("src/main.rs", RUST, 1500);
    let fine = chunk("src/main.rs", RUST, 120);
    assert!(fine.len() > coarse.len());
}

#[test]
fn first_chunk_starts_at_line_one() {
    for (name, content) in [("src/main.rs", RUST), ("config.py", PYTHON)] {
        let chunks = chunk(name, content, 200);
        assert_eq!(chunks[0].start_line, 1, "{name}");
        assert_eq!(chunks[0].chunk_index, 0, "{name}");
    }
}

#[test]
fn empty_and_whitespace_files() {
    assert!(chunk("empty.rs", "", 1500).is_empty());
    assert!(chunk("blank.py", "\n\n   \n", 1500).is_empty());
}

#[test]
fn file_without_newline_is_one_chunk() {
    let chunks = chunk("one.py", "x = 1", 1500);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "x = 1");
    assert_eq!((chunks[0].start_line, chunks[0].end_line), (1, 2));

    let minified = format!("function f(){{{}}}", "a=1;".repeat(500));
    let chunks = chunk("min.js", &minified, 1500);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, minified);
}

#[test]
fn last_line_without_newline_is_covered() {
    let content = RUST.trim_end();
    let chunks = chunk("src/main.rs", content, 200);
    assert!(covers_non_blank_lines(&chunks, content));
    let last = chunks.last().unwrap();
    assert!(last.content.ends_with('}'));
    assert_eq!(last.end_line, content.lines().count() + 1);
}

#[test]
fn oversized_literal_stays_whole() {
    let content = format!("const DATA: &str = \"{}\";\n", "a".repeat(2000));
    let chunks = chunk("data.rs", &content, 1500);

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].content.len() > 2000);
    assert_eq!((chunks[0].start_line, chunks[0].end_line), (1, 2));
}

#[test]
fn jsx_and_tsx_use_their_own_grammars() {
    let jsx = "export function App() {\n  return <div className=\"app\">Hello</div>;\n}\n";
    let chunks = chunk("App.jsx", jsx, 1500);
    assert!(!chunks.is_empty());
    assert!(chunks[0].content.contains("<div"));

    let tsx = "export const App = (): JSX.Element => {\n  return <main>Hi</main>;\n};\n";
    let chunks = chunk("App.tsx", tsx, 1500);
    assert!(!chunks.is_empty());
}

#[test]
fn batch_skips_excluded_and_unsupported_files() {
    let registry = LanguageRegistry::with_defaults();
    let chunker = CodeChunker::new(&registry, ChunkerConfig::default()).unwrap();
    let files = vec![
        SourceFile::new("package.json", "{\"name\": \"demo\"}\n"),
        SourceFile::new("config.py", PYTHON),
        SourceFile::new("notes.txt", "remember the milk\n"),
        SourceFile::new("build.log", "ok\n"),
        SourceFile::new("src/main.rs", RUST),
    ];

    let chunks = chunker.chunk_files(&files);
    let mut names: Vec<&str> = chunks.iter().map(|c| c.file_name.as_str()).collect();
    names.dedup();
    assert_eq!(names, vec!["config.py", "src/main.rs"]);
}

#[test]
fn records_deserialize_from_json() {
    let files: Vec<SourceFile> = serde_json::from_str(
        r#"[
            {"name": "a.py", "path": "repo/a.py", "content": "def a():\n    return 1\n"},
            {"name": "b.py"},
            {"content": "def c():\n    pass\n"}
        ]"#,
    )
    .unwrap();

    let registry = LanguageRegistry::with_defaults();
    let chunker = CodeChunker::new(&registry, ChunkerConfig::default()).unwrap();
    let chunks = chunker.chunk_files(&files);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].file_path, "repo/a.py");

    let json = serde_json::to_value(&chunks[0]).unwrap();
    assert_eq!(json["chunk_index"], 0);
    assert_eq!(json["start_line"], 1);
}
