//! File system utilities

use std::path::Path;

/// Shortens long paths for display
pub fn shorten_path(path: &Path, max_length: usize) -> String {
    let display = path.display().to_string();
    if display.len() <= max_length {
        return display;
    }

    let components: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .filter(|s| !s.is_empty() && s != "/")
        .collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return display;
    }

    // Keep last 2 components with ellipsis prefix
    format!(
        ".../{}/{}",
        components[components.len() - 2],
        components[components.len() - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(shorten_path(Path::new("/srv/app"), 30), "/srv/app");
    }

    #[test]
    fn test_long_path_keeps_last_two_components() {
        let path = Path::new("/home/someone/workspace/projects/team/service");
        assert_eq!(shorten_path(path, 20), ".../team/service");
    }

    #[test]
    fn test_two_component_path_not_shortened() {
        let path = Path::new("averyveryverylongdirectory/anotherlongname");
        assert_eq!(shorten_path(path, 10), path.display().to_string());
    }
}
