pub mod pixel_const {
    pub const OPENS_TABLE: &str = "opens";

    pub const DEFAULT_RECIPIENT_ID: &str = "unknown";
    pub const DEFAULT_MESSAGE_ID: &str = "";
    pub const DEFAULT_STATS_LIMIT: &str = "50";
    pub const STATS_UA_MAX_CHARS: usize = 140;

    // ? Upstream / CDN supplied headers
    pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
    pub const CF_IP_COUNTRY: &str = "cf-ipcountry";
    pub const X_ROBOTS_TAG: &str = "x-robots-tag";

    pub const NO_CACHE: &str = "no-store, no-cache, must-revalidate, max-age=0";
    pub const NO_INDEX: &str = "noindex, nofollow";

    // 1x1, 8-bit RGBA, fully transparent
    pub const PNG_1X1_TRANSPARENT: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x60,
        0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0xE5, 0x27, 0xD4, 0xA2, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];
}

pub mod env_const {
    pub const DB_PATH_VAR: &str = "PIXEL_DB";
    pub const PORT_VAR: &str = "PORT";

    pub const DEFAULT_DB_PATH: &str = "opens.db";
    pub const DEFAULT_PORT: u16 = 5000;
}

#[cfg(test)]
mod tests {
    use super::pixel_const::PNG_1X1_TRANSPARENT;

    #[test]
    fn test_pixel_is_png_with_1x1_rgba_header() {
        assert_eq!(&PNG_1X1_TRANSPARENT[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(&PNG_1X1_TRANSPARENT[12..16], b"IHDR");
        // width, height
        assert_eq!(&PNG_1X1_TRANSPARENT[16..20], &[0, 0, 0, 1]);
        assert_eq!(&PNG_1X1_TRANSPARENT[20..24], &[0, 0, 0, 1]);
        // bit depth 8, color type 6 (RGBA)
        assert_eq!(PNG_1X1_TRANSPARENT[24], 8);
        assert_eq!(PNG_1X1_TRANSPARENT[25], 6);
        assert_eq!(PNG_1X1_TRANSPARENT.len(), 67);
        assert_eq!(&PNG_1X1_TRANSPARENT[55..63], b"\x00\x00\x00\x00IEND");
    }
}
