//! Media gallery listing.
//!
//! The page is served statically, so there is no directory listing to read at
//! runtime. This list mirrors what ships in the gallery folder; smaller videos
//! come first so they start loading before the heavy ones.

pub struct MediaConfig {
    /// Folder (relative to the page) the media files live in
    pub folder: &'static str,
    pub header_title: &'static str,
    pub header_blurb: &'static str,
    /// Ordered file names inside `folder`
    pub files: &'static [&'static str],
}

pub const MEDIA: MediaConfig = MediaConfig {
    folder: "assets/gallery/",
    header_title: "VPOWER Media Gallery",
    header_blurb: "Behind the scenes of our craft - images and videos of our lighting creations",
    files: &[
        "WhatsApp Image 2026-02-10 at 5.12.17 PM.jpeg",
        "WhatsApp Image 2026-02-10 at 5.12.18 PM.jpeg",
        "WhatsApp Image 2026-02-10 at 5.27.34 PM.jpeg",
        "WhatsApp Video 2026-02-10 at 2.53.44 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.27.33 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.52 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.51 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.50 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.53.43 PM (3).mp4",
        "WhatsApp Video 2026-02-10 at 5.27.34 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 5.27.34 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.27.30 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 5.27.30 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.27.29 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 5.27.29 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.27.25 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.53.43 PM (2).mp4",
        "WhatsApp Video 2026-02-10 at 2.53.43 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 2.53.43 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.53.42 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.53.28 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.53.04 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.28.18 PM.mp4",
        "WhatsApp Video 2026-02-10 at 2.28.11 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.19 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.17 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 5.12.17 PM.mp4",
        "WhatsApp Video 2026-02-10 at 5.12.16 PM (1).mp4",
        "WhatsApp Video 2026-02-10 at 5.12.16 PM.mp4",
        "image (1).png",
        "image (2).png",
        "image (3).png",
        "image (4).png",
        "image.png",
    ],
};
