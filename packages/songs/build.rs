use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("songs.rs");

    let mut code = String::new();
    code.push_str("/// Embedded song files\n");
    code.push_str("pub static SONGS: &[(&str, &str)] = &[\n");

    let library_dir = Path::new("library");

    if library_dir.exists() {
        let mut entries: Vec<_> = WalkDir::new(library_dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "song"))
            .collect();
        entries.sort_by(|a, b| a.path().cmp(b.path()));

        for entry in entries {
            let path = entry.path();
            // name is the relative path without the extension, "/" separated
            let relative = path.strip_prefix(library_dir).unwrap().with_extension("");
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if let Ok(content) = fs::read_to_string(path) {
                code.push_str(&format!("    ({:?}, {:?}),\n", name, content));
            }
        }
    }

    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=library");
}
