//! Chunk a batch of files and print its repository map.
//!
//! ```text
//! cargo run --example repo_map                 # built-in sample files
//! cargo run --example repo_map -- files.json   # [{"name": ..., "content": ...}, ...]
//! RUST_LOG=debug cargo run --example repo_map  # per-file progress
//! ```

use std::error::Error;

use codeslabs::{
    Chunker, ChunkerConfig, CodeChunker, LanguageRegistry, RepoMapConfig, RepoMapper, SourceFile,
};

fn sample_files() -> Vec<SourceFile> {
    vec![
        SourceFile::new(
            "app/store.py",
            "import json\n\n\nclass Store:\n    def __init__(self, path):\n        self.path = path\n\n    def load(self):\n        with open(self.path) as f:\n            return json.load(f)\n",
        ),
        SourceFile::new(
            "app/main.py",
            "from store import Store\n\n\ndef main():\n    print(Store(\"data.json\").load())\n\n\nmain()\n",
        ),
        SourceFile::new(
            "src/lib.rs",
            "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n\n#[cfg(test)]\nmod tests {\n    #[test]\n    fn adds() {\n        assert_eq!(super::add(1, 2), 3);\n    }\n}\n",
        ),
        SourceFile::new("package.json", "{\"name\": \"demo\"}\n"),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let files = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => sample_files(),
    };

    let registry = LanguageRegistry::with_defaults();

    let chunker = CodeChunker::new(&registry, ChunkerConfig::for_ingestion())?;
    for chunk in chunker.chunk_files(&files) {
        println!(
            "{}#{} lines {}-{} ({} bytes)",
            chunk.file_name,
            chunk.chunk_index,
            chunk.start_line,
            chunk.end_line,
            chunk.content.len()
        );
    }

    let mapper = RepoMapper::new(&registry, RepoMapConfig::default())?;
    println!("{}", mapper.generate(&files));
    Ok(())
}
