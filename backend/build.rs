use std::fs;
use std::path::Path;

// Copies the trunk bundle of the frontend into the asset root when it has been built.
fn main() {
    let out_dir = Path::new("public");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).content_only(true),
        )
            .unwrap();
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
