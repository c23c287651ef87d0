/// Location of the CurseForge Linux AppImage the layout below was measured against.
pub const CURSEFORGE_APPIMAGE_URL: &str =
    "https://curseforge.overwolf.com/electron/linux/CurseForge-0.198.1-21.AppImage";

/// Where the key lives inside one specific packed asset.
///
/// Everything that ties the pipeline to a particular asset version is kept
/// here. Moving to a new AppImage release means measuring a new layout, not
/// touching the stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLayout {
    /// Byte offset of the compressed region inside the remote file.
    pub offset: u64,
    /// Number of bytes to request, see [`range_header`](crate::io::range_header).
    pub length: u64,
    /// Uncompressed size of the part of the stream that precedes `offset`.
    /// Written as the synthetic size header in front of the fetched slice.
    pub skipped_size: u32,
    /// Literal text immediately before the key value.
    pub marker: &'static str,
}

impl AssetLayout {
    /// Layout of `CurseForge-0.198.1-21.AppImage`.
    pub const CURSEFORGE_APPIMAGE: AssetLayout = AssetLayout {
        offset: 82_926_761,
        length: 84_196,
        skipped_size: 131_072,
        marker: r#""cfCoreApiKey":""#,
    };
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self::CURSEFORGE_APPIMAGE
    }
}
