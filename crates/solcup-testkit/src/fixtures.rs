//! Fixture builders: upstream JSON, release records, fake binaries, archives

use serde_json::{Value, json};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// One upstream release object: `{"tag_name": ..., "assets": [...]}`
///
/// Extra fields mimic the real GitHub payload so parsers are exercised
/// against unknown keys.
pub fn github_release(tag: &str, asset_urls: &[&str]) -> Value {
    json!({
        "url": format!("https://api.github.com/repos/ethereum/solidity/releases/{}", tag),
        "tag_name": tag,
        "draft": false,
        "prerelease": false,
        "assets": asset_urls
            .iter()
            .map(|url| json!({
                "name": url.rsplit('/').next().unwrap_or(url),
                "browser_download_url": url,
                "size": 1024,
            }))
            .collect::<Vec<_>>(),
    })
}

/// Serialized upstream listing for the given `(tag, asset urls)` pairs
pub fn github_releases_json(releases: &[(&str, &[&str])]) -> String {
    let list: Vec<Value> = releases
        .iter()
        .map(|(tag, urls)| github_release(tag, urls))
        .collect();
    Value::Array(list).to_string()
}

/// Serialized cache/bundled snapshot with one record per `(version, windows, linux, mac)`
pub fn release_record_json(records: &[(&str, &str, &str, &str)]) -> String {
    let list: Vec<Value> = records
        .iter()
        .map(|(version, windows, linux, mac)| {
            json!({
                "version": version,
                "windowsUrl": windows,
                "linuxUrl": linux,
                "macUrl": mac,
            })
        })
        .collect();
    Value::Array(list).to_string()
}

/// How a fake compiler behaves when run
#[derive(Debug, Clone, Copy)]
pub enum ExitBehavior {
    /// Print its arguments one per line, then exit with the code
    Exit(i32),
    /// Sleep the given number of seconds, then exit 0
    SleepThenExit(u32),
    /// Never terminate on its own
    Hang,
}

/// Shell script body standing in for a `solc` binary
pub fn fake_solc_script(behavior: ExitBehavior) -> String {
    match behavior {
        ExitBehavior::Exit(code) => format!(
            "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done\nexit {}\n",
            code
        ),
        ExitBehavior::SleepThenExit(secs) => format!("#!/bin/sh\nsleep {}\nexit 0\n", secs),
        ExitBehavior::Hang => "#!/bin/sh\nwhile true; do sleep 1; done\n".to_string(),
    }
}

/// Writes a fake compiler at `path` (creating parents) and marks it executable
pub fn write_fake_solc(path: &Path, behavior: ExitBehavior) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fake solc directory");
    }
    fs::write(path, fake_solc_script(behavior)).expect("Failed to write fake solc");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).unwrap();
    }

    path.to_path_buf()
}

/// In-memory zip archive containing `(name, contents)` entries
pub fn zip_with_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut zip = zip::ZipWriter::new(&mut cursor);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);
        for (name, contents) in entries {
            zip.start_file(*name, options).expect("Failed to start zip entry");
            zip.write_all(contents).expect("Failed to write zip entry");
        }
        zip.finish().expect("Failed to finish zip");
    }
    cursor.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_releases_json_shape() {
        let body = github_releases_json(&[(
            "v0.8.19",
            &["https://example.com/solc-macos", "https://example.com/solc-static-linux"],
        )]);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed[0]["tag_name"], "v0.8.19");
        assert_eq!(
            parsed[0]["assets"][1]["browser_download_url"],
            "https://example.com/solc-static-linux"
        );
    }

    #[test]
    fn test_release_record_json_uses_camel_case() {
        let body = release_record_json(&[("0.8.9", "", "https://l", "https://m")]);
        let parsed: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed[0]["version"], "0.8.9");
        assert_eq!(parsed[0]["linuxUrl"], "https://l");
        assert_eq!(parsed[0]["windowsUrl"], "");
    }

    #[test]
    fn test_zip_with_entries_round_trips() {
        let bytes = zip_with_entries(&[("solc.exe", b"binary"), ("soltest.exe", b"other")]);
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[test]
    #[cfg(unix)]
    fn test_write_fake_solc_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let path = write_fake_solc(&temp.path().join("0.8.19/solc"), ExitBehavior::Exit(0));
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
