use chrono::{DateTime, Utc};
use std::time::Duration;
use uuid::Uuid;

/// Resume upload rules. The same policy backs both direct uploads and
/// presigned URLs.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_types: &'static [(&'static str, &'static str)],
    pub signed_url_ttl: Duration,
    pub key_prefix: &'static str,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::MAX_FILE_SIZE_BYTES,
            allowed_types: Self::ALLOWED_TYPES,
            signed_url_ttl: Self::SIGNED_URL_TTL,
            key_prefix: "resumes",
        }
    }
}

impl UploadPolicy {
    pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
    pub const SIGNED_URL_TTL: Duration = Duration::from_secs(15 * 60);

    /// Extension (lowercase, with dot) to the content type stored with it.
    pub const ALLOWED_TYPES: &'static [(&'static str, &'static str)] = &[
        (".pdf", "application/pdf"),
        (".doc", "application/msword"),
        (
            ".docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        ),
    ];

    /// Lowercased extension of `filename` including the dot, if it has one.
    pub fn extension(filename: &str) -> Option<String> {
        let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
        let dot = name.rfind('.')?;
        Some(name[dot..].to_ascii_lowercase())
    }

    /// Content type for an allowed file, `None` for anything else.
    pub fn content_type_for(&self, filename: &str) -> Option<(String, &'static str)> {
        let ext = Self::extension(filename)?;
        self.allowed_types
            .iter()
            .find(|(allowed, _)| *allowed == ext)
            .map(|(_, content_type)| (ext, *content_type))
    }

    pub fn within_size(&self, size: u64) -> bool {
        size <= self.max_file_size_bytes
    }

    /// `resumes/YYYY/MM/<uuid><ext>`
    pub fn object_key(&self, ext: &str, now: DateTime<Utc>) -> String {
        format!(
            "{}/{}/{}{}",
            self.key_prefix,
            now.format("%Y/%m"),
            Uuid::new_v4(),
            ext
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn maps_allowed_extensions_case_insensitively() {
        let policy = UploadPolicy::default();

        assert_eq!(
            policy.content_type_for("CV.PDF"),
            Some((".pdf".to_string(), "application/pdf"))
        );
        assert_eq!(
            policy.content_type_for("resume.docx").map(|(_, ct)| ct),
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        );
        assert_eq!(policy.content_type_for("virus.exe"), None);
        assert_eq!(policy.content_type_for("no_extension"), None);
    }

    #[test]
    fn extension_ignores_directories() {
        assert_eq!(UploadPolicy::extension("dir.v2/cv"), None);
        assert_eq!(UploadPolicy::extension("C:\\files\\cv.Doc"), Some(".doc".into()));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let policy = UploadPolicy::default();
        assert!(policy.within_size(10 * 1024 * 1024));
        assert!(!policy.within_size(10 * 1024 * 1024 + 1));
    }

    #[test]
    fn object_key_layout() {
        let policy = UploadPolicy::default();
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 10, 0, 0).unwrap();

        let key = policy.object_key(".pdf", now);

        let rest = key.strip_prefix("resumes/2026/03/").unwrap();
        let id = rest.strip_suffix(".pdf").unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn signed_urls_live_fifteen_minutes() {
        assert_eq!(UploadPolicy::default().signed_url_ttl.as_secs(), 900);
    }
}
