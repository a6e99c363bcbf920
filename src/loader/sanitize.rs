/// Textually normalize a candidate path before it is used for directory
/// checks or loading.
///
/// Backslashes become `/` and relative-traversal segments (`../`, `./`) are
/// dropped. This is a best-effort pre-filter that runs before the real
/// containment check; it never consults the filesystem and cannot fail.
pub fn sanitize(path: &str) -> String {
    let normalized = path.replace('\\', "/");

    normalized
        .split('/')
        .filter(|segment| *segment != "." && *segment != "..")
        .collect::<Vec<_>>()
        .join("/")
}
