use std::path::Path;

/// File-picker filter descriptor: a display name and the accepted extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const IMAGE_FILTER: FileFilter = FileFilter {
    name: "Images",
    extensions: &["png", "jpg", "jpeg", "webp"],
};

pub const PDF_FILTER: FileFilter = FileFilter {
    name: "PDF",
    extensions: &["pdf"],
};

pub const AUDIO_FILTER: FileFilter = FileFilter {
    name: "Audio",
    extensions: &["mp3", "wav", "flac", "ogg", "m4a", "aac"],
};

impl FileFilter {
    /// Case-insensitive extension check.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(ext))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::png(IMAGE_FILTER, "scan.png", true)]
    #[case::upper_jpeg(IMAGE_FILTER, "SCAN.JPEG", true)]
    #[case::pdf_not_image(IMAGE_FILTER, "book.pdf", false)]
    #[case::pdf(PDF_FILTER, "dir/book.pdf", true)]
    #[case::m4a(AUDIO_FILTER, "track.m4a", true)]
    #[case::no_extension(AUDIO_FILTER, "README", false)]
    fn test_matches(#[case] filter: FileFilter, #[case] path: &str, #[case] expected: bool) {
        assert_eq!(filter.matches(Path::new(path)), expected);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(IMAGE_FILTER.name, "Images");
        assert_eq!(PDF_FILTER.name, "PDF");
        assert_eq!(AUDIO_FILTER.extensions.len(), 6);
    }
}
