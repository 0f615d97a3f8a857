use std::env;
use std::fs;
use std::path::Path;

/// Embedded data files: (source path, name in OUT_DIR). Missing optional files and a
/// missing dataset both become empty placeholders; the page shows its empty
/// state instead of failing the build.
const DATA_FILES: [(&str, &str); 2] = [
    ("../public/updated_mrb_basins.json", "updated_mrb_basins.json"),
    ("../public/rivers.json", "rivers.json"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (src, name) in DATA_FILES {
        let src = Path::new(src);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(src, &dest).unwrap();
        } else {
            println!("cargo:warning={} not found, embedding empty placeholder", src.display());
            fs::write(&dest, "").unwrap();
        }
        println!("cargo:rerun-if-changed={}", src.display());
    }

    println!("cargo:rerun-if-changed=build.rs");
}
