use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("covergen-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn stems_replace_whitespace_and_strip_illegal_chars() {
    assert_eq!(safe_filename_stem("Hello   World"), "Hello-World");
    assert_eq!(safe_filename_stem("a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
    assert_eq!(safe_filename_stem("  --Go 包命名指南..  "), "Go-包命名指南");
    assert_eq!(safe_filename_stem("x - - y"), "x-y");
    assert_eq!(safe_filename_stem("tab\tand\u{7}bell"), "tab-andbell");
}

#[test]
fn stems_are_capped() {
    let long = "a".repeat(79) + "-" + &"b".repeat(40);
    let stem = safe_filename_stem(&long);
    assert_eq!(stem.chars().count(), 79);
    assert!(!stem.ends_with('-'));

    let cjk = "包".repeat(100);
    assert_eq!(safe_filename_stem(&cjk).chars().count(), 80);
}

#[test]
fn unusable_text_hashes() {
    let stem = safe_filename_stem("???");
    assert!(stem.starts_with("cover-"));
    assert_eq!(stem.len(), "cover-".len() + 10);
    assert_eq!(stem, safe_filename_stem("???"));
    assert_ne!(stem, safe_filename_stem("///"));
}

#[test]
fn default_path_is_png_in_dir() {
    assert_eq!(
        default_output_path("My Post", Path::new("out")),
        PathBuf::from("out/My-Post.png")
    );
}

#[test]
fn save_creates_parents_and_picks_encoder() {
    let dir = scratch_dir("save");
    let img = RgbImage::from_fn(32, 20, |x, y| image::Rgb([x as u8 * 8, y as u8 * 12, 90]));

    let png = dir.join("nested/deeper/cover.png");
    save_cover(&img, &png).unwrap();
    let decoded = image::open(&png).unwrap().to_rgb8();
    assert_eq!(decoded, img);

    let jpg = dir.join("cover.JPG");
    save_cover(&img, &jpg).unwrap();
    let bytes = std::fs::read(&jpg).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_extension_is_an_encode_error() {
    let dir = scratch_dir("badext");
    let img = RgbImage::new(4, 4);
    let err = save_cover(&img, &dir.join("cover.nope")).unwrap_err();
    assert!(err.to_string().starts_with("encode error:"), "{err}");
    assert!(!dir.join("cover.nope").exists());
}

#[test]
fn failed_encode_leaves_no_file_behind() {
    let dir = scratch_dir("failenc");
    let img = RgbImage::new(1600, 900);
    // ICO caps each side at 256 pixels.
    let ico = dir.join("cover.ico");
    let err = save_cover(&img, &ico).unwrap_err();
    assert!(matches!(err, CoverError::Encode(_)), "{err}");
    assert!(!ico.exists());

    let existing = dir.join("keep.ico");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&existing, b"previous cover").unwrap();
    assert!(save_cover(&img, &existing).is_err());
    assert_eq!(std::fs::read(&existing).unwrap(), b"previous cover");

    let _ = std::fs::remove_dir_all(&dir);
}
