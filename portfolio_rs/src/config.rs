//! Site content and settings.
//!
//! Everything the page displays is read once from a TOML file (see
//! `content/site.toml`) into an immutable [`SiteConfig`], which is then
//! handed to the components that render it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intro::{DEFAULT_SETTLE_MS, DEFAULT_TYPE_INTERVAL_MS, IntroTiming};

/// Hosted endpoint that accepts contact form deliveries.
pub const DEFAULT_EMAIL_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Errors raised while loading site content.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The content file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The content is not valid TOML for [`SiteConfig`].
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// The content parsed but is unusable.
    #[error("invalid site content: {0}")]
    Invalid(String),
}

/// Root of the site content.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: Profile,
    pub socials: Vec<SocialLink>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<String>,
    pub contact: ContactSettings,
    pub intro: IntroSettings,
}

/// Who the site is about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub about: String,
    /// Static image (or animated gif) shown after the intro.
    pub profile_image: String,
    /// Static document opened in a new browsing context.
    pub resume_url: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            location: String::new(),
            email: String::new(),
            phone: String::new(),
            about: String::new(),
            profile_image: "/my.gif".into(),
            resume_url: "/resume.pdf".into(),
        }
    }
}

/// External profile link shown under the hero.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    #[serde(default = "IconKind::external")]
    pub icon: IconKind,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    pub period: String,
    pub credential: String,
    pub location: String,
}

/// Skill tags grouped the way the Skills section shows them.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub languages: Vec<String>,
    pub libraries: Vec<String>,
    pub tools: Vec<String>,
}

impl Skills {
    /// `(heading, tags)` pairs in display order.
    pub fn groups(&self) -> [(&'static str, &[String]); 3] {
        [
            ("Programming Languages", &self.languages),
            ("AI / ML Libraries", &self.libraries),
            ("Frameworks & Tools", &self.tools),
        ]
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub org: String,
    pub period: String,
    pub bullets: Vec<String>,
    pub icon: IconKind,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub period: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
}

/// Credentials of the hosted message-delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub service_id: String,
    pub template_id: String,
    /// Public client key; safe to ship to browsers.
    pub public_key: String,
    pub endpoint: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            endpoint: DEFAULT_EMAIL_ENDPOINT.into(),
        }
    }
}

/// Intro animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroSettings {
    /// Text typed out before the profile image appears.
    pub greeting: String,
    pub type_interval_ms: u64,
    pub settle_ms: u64,
}

impl Default for IntroSettings {
    fn default() -> Self {
        Self {
            greeting: "{ hello world }".into(),
            type_interval_ms: DEFAULT_TYPE_INTERVAL_MS,
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

impl IntroSettings {
    pub fn timing(&self) -> IntroTiming {
        IntroTiming {
            type_interval: Duration::from_millis(self.type_interval_ms),
            settle: Duration::from_millis(self.settle_ms),
        }
    }
}

/// Icons that content entries may reference.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    #[default]
    Cpu,
    ShieldCheck,
    FolderGit,
    GraduationCap,
    Award,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    ExternalLink,
    Download,
}

impl IconKind {
    fn external() -> Self {
        IconKind::ExternalLink
    }
}

/// In-page anchors; the only addressing scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Achievements,
    Contact,
}

impl SectionId {
    /// Sections linked from the navigation bar, in page order.
    pub const NAV: [SectionId; 7] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    /// Element id, without `#`.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Achievements => "achievements",
            SectionId::Contact => "contact",
        }
    }

    /// `href` value pointing at the section.
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Human label, used for headings and nav links.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Achievements => "Achievements",
            SectionId::Contact => "Contact",
        }
    }
}

impl SiteConfig {
    /// Parse and validate content from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load content from a file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            projects = config.projects.len(),
            experience = config.experience.len(),
            "site content loaded"
        );
        Ok(config)
    }

    /// Reject content the page cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.name.trim().is_empty() {
            return Err(ConfigError::Invalid("profile.name must not be empty".into()));
        }
        if self.intro.type_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "intro.type_interval_ms must be greater than zero".into(),
            ));
        }
        let contact = &self.contact;
        for (field, value) in [
            ("contact.service_id", &contact.service_id),
            ("contact.template_id", &contact.template_id),
            ("contact.public_key", &contact.public_key),
            ("contact.endpoint", &contact.endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[profile]
name = "Ada Example"

[contact]
service_id = "service_test"
template_id = "template_test"
public_key = "public_test"
"#;

    #[test]
    fn test_minimal_content_uses_defaults() {
        let config = SiteConfig::from_toml_str(MINIMAL).expect("valid content");
        assert_eq!(config.profile.name, "Ada Example");
        assert_eq!(config.profile.profile_image, "/my.gif");
        assert_eq!(config.contact.endpoint, DEFAULT_EMAIL_ENDPOINT);
        assert_eq!(config.intro, IntroSettings::default());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn test_load_valid_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&path).expect("create content");
        writeln!(
            file,
            r#"achievements = ["Ran a webinar"]
{MINIMAL}
[[experience]]
title = "Intern"
org = "Somewhere"
period = "2025"
bullets = ["Did things"]
icon = "shield-check"

[[socials]]
label = "GitHub"
href = "https://github.com/example"
icon = "github"

[intro]
greeting = "hi"
type_interval_ms = 40
"#
        )
        .expect("write content");

        let config = SiteConfig::load_from_path(&path).expect("load");
        assert_eq!(config.achievements, vec!["Ran a webinar".to_string()]);
        assert_eq!(config.experience[0].icon, IconKind::ShieldCheck);
        assert_eq!(config.socials[0].icon, IconKind::Github);
        assert_eq!(config.intro.greeting, "hi");
        assert_eq!(config.intro.timing().type_interval, Duration::from_millis(40));
        assert_eq!(config.intro.settle_ms, DEFAULT_SETTLE_MS);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = SiteConfig::from_toml_str("[profile\nname=").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation() {
        let err = SiteConfig::from_toml_str("[profile]\nname = \" \"").unwrap_err();
        assert!(err.to_string().contains("profile.name"));

        let no_key = MINIMAL.replace("public_key = \"public_test\"", "");
        let err = SiteConfig::from_toml_str(&no_key).unwrap_err();
        assert!(err.to_string().contains("contact.public_key"));

        let zero = format!("{MINIMAL}\n[intro]\ntype_interval_ms = 0\n");
        assert!(matches!(
            SiteConfig::from_toml_str(&zero),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_section_anchors() {
        let hrefs: Vec<String> = SectionId::NAV.iter().map(|s| s.href()).collect();
        assert_eq!(hrefs[0], "#about");
        assert_eq!(hrefs[6], "#contact");
        assert!(!SectionId::NAV.contains(&SectionId::Home));
        assert_eq!(SectionId::Achievements.label(), "Achievements");
    }
}
