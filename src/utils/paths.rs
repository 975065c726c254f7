use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Largest catalog snapshot the loader will read: 10MB
pub const MAX_DATA_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Reject files larger than `max_bytes`
///
/// Checks the already-open handle, so the size seen is the size of the file that will be
/// read (no window for the path to be swapped between check and read).
pub fn validate_file_size(file: &File, path: &Path, max_bytes: u64) -> Result<()> {
    let size = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?
        .len();

    if size > max_bytes {
        bail!("File too large: {} ({} bytes, max {} bytes)", path.display(), size, max_bytes);
    }

    Ok(())
}

/// Display a path with the home directory shown as `~`
///
/// ```no_run
/// use std::path::Path;
/// use case_search::utils::format_path_with_tilde;
///
/// println!("{}", format_path_with_tilde(Path::new("/home/alice/.local/share/case-search")));
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    tilde_with_home(path, dirs::home_dir().as_deref())
}

fn tilde_with_home(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }
    path.display().to_string()
}
