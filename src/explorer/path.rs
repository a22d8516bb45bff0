//! Lexical path helpers
//!
//! Virtual paths come straight from the URL and are treated as text: nothing in
//! here touches the filesystem.

/// Normalize a slash-separated path by text alone.
///
/// Collapses repeated separators, drops `.` elements, resolves `..` against the
/// preceding element where possible and strips trailing slashes. An empty
/// result becomes `.`, a rooted one `/`.
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(&last) if last != ".." => {
                    parts.pop();
                }
                // `/..` stays at the root
                _ if rooted => {}
                _ => parts.push(".."),
            },
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Parent of `path` computed by text: everything up to the last `/`, cleaned.
///
/// `"a/b"` gives `"a"`, `"a"` gives `"."`, `"/"` gives `"/"`.
pub fn lexical_parent(path: &str) -> String {
    let dir = path.rfind('/').map_or("", |idx| &path[..=idx]);
    clean(dir)
}

/// Join a virtual directory and an entry name, cleaning the result.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        clean(name)
    } else {
        clean(&format!("{dir}/{name}"))
    }
}

/// Extension of the final path element, including its leading dot.
///
/// Returns an empty string when the last element has no dot.
pub fn extension(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.rfind('.').map_or("", |idx| &name[idx..])
}
