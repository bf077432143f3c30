//! Argument construction for the tool invocations

use std::ffi::OsString;
use std::path::Path;

/// Arguments for a stream-copy trim: seek to `start_offset`, copy every
/// remaining stream untouched and write `output`.
///
/// The list is handed to the OS as an argument vector without a shell, so
/// spaces and quotes in paths need no escaping. The offset is passed through
/// verbatim; validating it is up to the caller.
pub fn build_trim_args(
    input: &Path,
    output: &Path,
    start_offset: &str,
    overwrite: bool,
) -> Vec<OsString> {
    vec![
        "-hide_banner".into(),
        "-nostdin".into(),
        if overwrite { "-y" } else { "-n" }.into(),
        "-i".into(),
        input.as_os_str().to_owned(),
        "-ss".into(),
        start_offset.into(),
        "-c".into(),
        "copy".into(),
        output.as_os_str().to_owned(),
    ]
}

/// Arguments for the metadata probe: open the input without an output so
/// the tool prints the container report to stderr and exits.
pub fn build_probe_args(input: &Path) -> Vec<OsString> {
    vec![
        "-hide_banner".into(),
        "-nostdin".into(),
        "-i".into(),
        input.as_os_str().to_owned(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_trim_args() {
        let args = build_trim_args(
            Path::new("/videos/in.mp4"),
            Path::new("/videos/in_clip.mp4"),
            "00:00:05",
            false,
        );
        assert_eq!(
            strings(&args),
            vec![
                "-hide_banner",
                "-nostdin",
                "-n",
                "-i",
                "/videos/in.mp4",
                "-ss",
                "00:00:05",
                "-c",
                "copy",
                "/videos/in_clip.mp4",
            ]
        );
    }

    #[test]
    fn test_paths_with_spaces_stay_single_arguments() {
        let args = build_trim_args(
            Path::new("/my videos/a \"b\" c.mp4"),
            Path::new("/my videos/a \"b\" c_clip.mp4"),
            "90",
            true,
        );
        assert_eq!(args.len(), 10);
        assert_eq!(args[2], OsString::from("-y"));
        assert_eq!(args[4], OsString::from("/my videos/a \"b\" c.mp4"));
        assert_eq!(args[9], OsString::from("/my videos/a \"b\" c_clip.mp4"));
    }

    #[test]
    fn test_offset_is_verbatim() {
        let args = build_trim_args(Path::new("a.mp4"), Path::new("b.mp4"), " 1:2 ; rm", false);
        assert_eq!(args[6], OsString::from(" 1:2 ; rm"));
    }

    #[test]
    fn test_probe_args_have_no_output() {
        let args = build_probe_args(Path::new("/videos/in.mp4"));
        assert_eq!(
            strings(&args),
            vec!["-hide_banner", "-nostdin", "-i", "/videos/in.mp4"]
        );
    }
}
