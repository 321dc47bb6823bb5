//! Static site content and the external endpoints the site talks to.
//!
//! Everything here is configuration, not state: demo clips, narrated works,
//! outbound links, and the object-storage prefix all media resolves through.

use crate::playback::DemoEntry;
use once_cell::sync::Lazy;

/// Object-storage prefix serving demo audio and imagery.
pub const MEDIA_BASE: &str = "https://pub-0274e76b677f47ea8135396e59f3ef10.r2.dev";

pub const SITE_URL: &str = "https://dmnarration.com";
pub const CONTACT_EMAIL: &str = "DeanMillerNarrator@gmail.com";
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mdalkedn";
pub const FORM_REDIRECT: &str = "https://dmnarration.com/?sent=1#contact";
pub const BOOKING_URL: &str = "https://outlook.office.com/book/DeanMillerNarration1@deanmillernarrator.com/s/-Gzrs2xlgUy8MfSGaPUf1A2?ismsaljsauthenabled";
pub const TIKTOK_URL: &str = "https://www.tiktok.com/@deanmillernarration";
pub const TIKTOK_HANDLE: &str = "@deanmillernarration";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/deanmillernarrator";
pub const DISCORD_URL: &str = "https://discord.com/users/1425271466538045512";

/// Resolve a media path against [`MEDIA_BASE`], percent-encoding each
/// segment (demo filenames carry spaces, commas and plus signs).
pub fn media_url(path: &str) -> String {
    let encoded: Vec<String> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("{}/{}", MEDIA_BASE, encoded.join("/"))
}

/// The featured demo list. Entries without a source render as placeholders
/// until a clip is uploaded.
pub static DEMOS: Lazy<Vec<DemoEntry>> = Lazy::new(|| {
    vec![
        DemoEntry::new(
            "LGBTQ+ Romance",
            "Bright, playful",
            Some(media_url(
                "Dean Miller - LGBTQ+ Romance - Male (BrightPlayful), Confident, Sex-PositiveFlirtatious.mp3",
            )),
        ),
        DemoEntry::new(
            "Romantasy",
            "Possessive, haunted",
            Some(media_url(
                "Dean Miller - Romantasy - Male (PossessiveHaunted), Harsh Control to Remorse, Deep Loss.mp3",
            )),
        ),
        DemoEntry::new(
            "Drama",
            "Somber, reflective",
            Some(media_url(
                "Dean Miller - Drama - Male (SomberDepressed), Reflective.mp3",
            )),
        ),
        DemoEntry::new("British Accent", "Intimate, dominant", None),
        DemoEntry::new("Thriller / Suspense", "Tense, controlled", None),
        DemoEntry::new("Contemporary Romance", "Warm, grounded", None),
    ]
});

/// One narrated audiobook shown on the portfolio page.
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    pub author: &'static str,
    pub link: &'static str,
    pub cover: &'static str,
}

impl Book {
    pub fn cover_url(&self) -> String {
        media_url(self.cover)
    }
}

pub static COMPLETED_WORKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book {
            title: "The Final Guardian",
            subtitle: Some("The Citadel of the Mind and the Garden"),
            author: "Alexander Kamenetsky",
            link: "https://www.amazon.com/Final-Guardian-Citadel-Mind-Garden/dp/B0G1CNQM8H",
            cover: "covers/the-final-guardian.jpg",
        },
        Book {
            title: "Santa Promised",
            subtitle: Some("A Christmas Novella"),
            author: "Laetitia Clark",
            link: "https://www.amazon.com/Santa-Promised-A-Christmas-Novella/dp/B0G6GLQGHK",
            cover: "covers/santa-promised.jpg",
        },
        Book {
            title: "The Circle",
            subtitle: Some("Rituals & Ruins"),
            author: "Lilian Monroe, Kayla Gerdes",
            link: "https://www.amazon.com/Audible-The-Circle-Rituals-Ruins/dp/B0GKQY7N27",
            cover: "covers/the-circle-rituals-and-ruins.jpg",
        },
        Book {
            title: "Sultry Secrets: Tease",
            subtitle: Some("Sultry Secrets Book 4"),
            author: "Bethanie Loren",
            link: "https://www.amazon.com/-/es/Bethanie-Loren-ebook/dp/B0G6VDHL9L",
            cover: "covers/sultry-secrets-tease.jpg",
        },
        Book {
            title: "Heir of the Emberscale",
            subtitle: None,
            author: "Shelby Gardner",
            link: "https://www.amazon.com/Heir-Emberscale-Shelby-Gardner-ebook/dp/B0FXR4Y9JB",
            cover: "covers/heir-of-emberscale.jpg",
        },
    ]
});

pub static IN_PROGRESS_WORKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book {
            title: "No One to Hold Me",
            subtitle: None,
            author: "Noelle Rahn-Johnson",
            link: "https://www.amazon.com/No-One-Hold-Noelle-Rahn-Johnson-ebook/dp/B088RMPLYX",
            cover: "covers/no-one-to-hold-me.jpg",
        },
        Book {
            title: "Merciless Punks",
            subtitle: None,
            author: "Madeline Fay",
            link: "https://www.amazon.com/Merciless-Punks-Enemies-romance-douchebags-ebook/dp/B09Z9P3C7V",
            cover: "covers/merciless-punks.jpg",
        },
        Book {
            title: "Unmasked Hearts",
            subtitle: None,
            author: "K.E. Noel",
            link: "https://www.amazon.com/Unmasked-Hearts-K-Noel-ebook/dp/B0FMKP92Y9",
            cover: "covers/unmasked-hearts.jpg",
        },
    ]
});

pub static COMING_SOON_WORKS: Lazy<Vec<Book>> = Lazy::new(|| {
    vec![
        Book {
            title: "Beating For You",
            subtitle: None,
            author: "L.L. McAlister",
            link: "https://www.amazon.com/Beating-You-Body-Nobody-That-ebook/dp/B0FNQ2F6P4",
            cover: "covers/beating-for-you.jpg",
        },
        Book {
            title: "Whiskey & Lies",
            subtitle: None,
            author: "E.A. Harper",
            link: "https://www.amazon.com/dp/B0FBT3XW76",
            cover: "covers/whiskey-and-lies.jpg",
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_encodes_each_segment() {
        let url = media_url("covers/the-final-guardian.jpg");
        assert_eq!(url, format!("{MEDIA_BASE}/covers/the-final-guardian.jpg"));

        let url = media_url("Dean Miller - Drama - Male (SomberDepressed), Reflective.mp3");
        assert!(url.starts_with(MEDIA_BASE));
        assert!(!url.contains(' '));
        assert!(url.contains("%20"));
        assert!(url.contains("%2C"));
    }

    #[test]
    fn demo_titles_are_unique_keys() {
        let mut titles: Vec<&str> = DEMOS.iter().map(|d| d.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), DEMOS.len());
    }

    #[test]
    fn sourced_demos_resolve_through_media_base() {
        for demo in DEMOS.iter().filter(|d| d.has_source()) {
            let src = demo.audio_source.as_deref().unwrap();
            assert!(src.starts_with(MEDIA_BASE), "unexpected source: {src}");
        }
    }
}
