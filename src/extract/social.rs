use std::collections::BTreeSet;
use std::fmt;

/// Social-media platforms recognized in anchor hrefs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    LinkedIn,
    Instagram,
}

/// Platform lookup table; the first matching entry wins
pub const SOCIAL_PLATFORMS: [SocialPlatform; 4] = [
    SocialPlatform::Facebook,
    SocialPlatform::Twitter,
    SocialPlatform::LinkedIn,
    SocialPlatform::Instagram,
];

impl SocialPlatform {
    /// Display name used in result entries
    pub fn name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }

    /// Domain substring identifying the platform
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook.com",
            Self::Twitter => "twitter.com",
            Self::LinkedIn => "linkedin.com",
            Self::Instagram => "instagram.com",
        }
    }

    /// Returns the first platform in table order whose domain appears in `href`
    pub fn classify(href: &str) -> Option<SocialPlatform> {
        SOCIAL_PLATFORMS
            .iter()
            .copied()
            .find(|platform| href.contains(platform.domain()))
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds `"<Platform>: <href>"` entries for every href that names a platform
pub fn extract_social_media(anchor_hrefs: &[String]) -> BTreeSet<String> {
    anchor_hrefs
        .iter()
        .filter_map(|href| {
            SocialPlatform::classify(href).map(|platform| format!("{}: {}", platform, href))
        })
        .collect()
}
