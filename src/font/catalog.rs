//! Static font lookup data: face-name to file-name candidates and the
//! OS-specific directories to search. Pure data, initialized at compile time.

use std::env;
use std::path::PathBuf;

/// Default face candidates for the current platform, in priority order.
/// CJK-capable faces come first so non-Latin labels render where possible.
pub fn default_faces() -> &'static [&'static str] {
    match env::consts::OS {
        "macos" => &[
            "Hiragino Sans",
            "Hiragino Kaku Gothic ProN",
            "Arial",
            "Helvetica",
        ],
        "windows" => &["Yu Gothic", "BIZ UDGothic", "Meiryo", "MS Gothic", "Arial"],
        "linux" => &[
            "Noto Sans CJK JP",
            "Noto Sans JP",
            "IPAex Gothic",
            "IPA Gothic",
            "VL Gothic",
            "Takao Gothic",
            "DejaVu Sans",
            "Liberation Sans",
        ],
        _ => &["Arial", "DejaVu Sans", "Liberation Sans"],
    }
}

/// File-name candidates for a face name (matched case-insensitively,
/// whitespace-trimmed). Unknown faces have no candidates.
pub fn candidate_files(face: &str) -> &'static [&'static str] {
    match face.trim().to_ascii_lowercase().as_str() {
        // macOS Japanese faces
        "hiragino sans" => &["ヒラギノ角ゴシック W3.ttc", "HiraginoSans-W3.ttc"],
        "hiragino kaku gothic pron" => &["ヒラギノ角ゴ ProN W3.otf", "HiraKakuProN-W3.otf"],
        "hiragino kaku gothic pro" => &["ヒラギノ角ゴ Pro W3.otf", "HiraKakuPro-W3.otf"],

        // Windows Japanese faces
        "yu gothic" => &["YuGothR.ttc", "YuGothM.ttc", "YuGothB.ttc"],
        "yu mincho" => &["YuMincho.ttc"],
        "meiryo" => &["meiryo.ttc", "Meiryo.ttc"],
        "ms gothic" => &["msgothic.ttc"],
        "ms mincho" => &["msmincho.ttc"],
        "biz udgothic" => &["BIZ-UDGothicR.ttc", "BIZUDGothic-Regular.ttf"],
        "biz udmincho" => &["BIZ-UDMinchoM.ttc", "BIZUDMincho-Regular.ttf"],

        // Linux Japanese faces
        "noto sans cjk jp" => &[
            "NotoSansCJK-Regular.ttc",
            "NotoSansCJKjp-Regular.otf",
            "NotoSansCJKjp-Regular.ttf",
        ],
        "noto sans jp" => &[
            "NotoSansJP-Regular.otf",
            "NotoSansJP-Regular.ttf",
            "NotoSansJP[wght].ttf",
        ],
        "noto serif cjk jp" => &["NotoSerifCJK-Regular.ttc", "NotoSerifCJKjp-Regular.otf"],
        "ipa gothic" => &["ipag.ttf", "IPAGothic.ttf"],
        "ipaex gothic" => &["ipaexg.ttf", "IPAexGothic.ttf"],
        "ipa mincho" => &["ipam.ttf", "IPAMincho.ttf"],
        "ipaex mincho" => &["ipaexm.ttf", "IPAexMincho.ttf"],
        "vl gothic" => &["VL-Gothic-Regular.ttf"],
        "takao gothic" => &["TakaoGothic.ttf"],

        // Cross-platform faces
        "arial" => &["Arial.ttf", "arial.ttf"],
        "helvetica" => &["Helvetica.ttc", "Helvetica.ttf"],
        "dejavu sans" => &["DejaVuSans.ttf"],
        "liberation sans" => &["LiberationSans-Regular.ttf"],
        "roboto" => &["Roboto-Regular.ttf", "Roboto[wdth,wght].ttf"],

        _ => &[],
    }
}

/// Font directories to search on the current platform.
pub fn font_dirs() -> Vec<PathBuf> {
    match env::consts::OS {
        "macos" => {
            let mut dirs = vec![
                PathBuf::from("/System/Library/Fonts"),
                PathBuf::from("/Library/Fonts"),
            ];
            if let Some(home) = env::var_os("HOME") {
                dirs.push(PathBuf::from(home).join("Library").join("Fonts"));
            }
            dirs
        }
        "windows" => {
            let windir = env::var_os("WINDIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
            let mut dirs = vec![windir.join("Fonts")];
            if let Some(local) = env::var_os("LOCALAPPDATA") {
                dirs.push(
                    PathBuf::from(local)
                        .join("Microsoft")
                        .join("Windows")
                        .join("Fonts"),
                );
            }
            dirs
        }
        "linux" => {
            let mut dirs = vec![
                PathBuf::from("/usr/share/fonts"),
                PathBuf::from("/usr/local/share/fonts"),
            ];
            if let Some(home) = env::var_os("HOME") {
                let home = PathBuf::from(home);
                dirs.push(home.join(".fonts"));
                dirs.push(home.join(".local").join("share").join("fonts"));
            }
            dirs
        }
        _ => Vec::new(),
    }
}
