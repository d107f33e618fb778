//! Cosmetic hero skins
//!
//! A skin is an opaque reference handed to the renderer. It never reaches the
//! simulation. Custom skins come from an image-synthesis request built from a
//! short text prompt; if that request fails, the current selection stays.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of built-in color skins
pub const PRESET_SKIN_COUNT: usize = 4;

/// Built-in skin colors (RGBA)
pub const PRESET_SKINS: [[f32; 4]; PRESET_SKIN_COUNT] = [
    [0.98, 0.45, 0.09, 1.0], // orange
    [0.23, 0.51, 0.96, 1.0], // blue
    [0.13, 0.77, 0.37, 1.0], // green
    [0.66, 0.33, 0.97, 1.0], // purple
];

/// What the renderer draws for the hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinRef {
    Preset(usize),
    /// `data:<mime>;base64,<payload>` image
    Custom(String),
}

impl Default for SkinRef {
    fn default() -> Self {
        SkinRef::Preset(0)
    }
}

impl SkinRef {
    /// Color for preset skins (out-of-range indices fall back to the first)
    pub fn preset_color(&self) -> Option<[f32; 4]> {
        match self {
            SkinRef::Preset(i) => Some(*PRESET_SKINS.get(*i).unwrap_or(&PRESET_SKINS[0])),
            SkinRef::Custom(_) => None,
        }
    }
}

/// Text-prompt request for a generated hero sprite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateHeroRequest {
    /// Player's description of the hero
    pub prompt: String,
}

impl GenerateHeroRequest {
    /// Aspect ratio asked of the image model
    pub const ASPECT_RATIO: &'static str = "9:16";

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// Full instruction sent to the image model
    pub fn model_prompt(&self) -> String {
        format!(
            "Generate a full-body 8-bit pixel art sprite of a video game character. \
             The character should be facing right, suitable for a side-scrolling game. \
             The background must be transparent. The character is: {}",
            self.prompt.trim()
        )
    }
}

/// Result of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedHero {
    pub image_data_uri: String,
}

/// Image-synthesis backend (network service, local model, test double)
pub trait HeroImageGenerator {
    fn generate(&mut self, request: &GenerateHeroRequest) -> Result<GeneratedHero>;
}

/// Check for `data:<mime>;base64,<payload>`
pub fn is_image_data_uri(uri: &str) -> bool {
    let Some(rest) = uri.strip_prefix("data:") else {
        return false;
    };
    let Some((mime, payload)) = rest.split_once(";base64,") else {
        return false;
    };
    mime.starts_with("image/") && !payload.is_empty()
}

/// Start-screen skin picker
#[derive(Debug, Clone, Default)]
pub struct SkinSelector {
    current: SkinRef,
    /// Last preset chosen, so cycling resumes from it after a custom skin
    preset: usize,
}

impl SkinSelector {
    pub fn new(preset: usize) -> Self {
        let preset = preset % PRESET_SKIN_COUNT;
        Self {
            current: SkinRef::Preset(preset),
            preset,
        }
    }

    pub fn current(&self) -> &SkinRef {
        &self.current
    }

    pub fn next(&mut self) -> &SkinRef {
        self.preset = (self.preset + 1) % PRESET_SKIN_COUNT;
        self.current = SkinRef::Preset(self.preset);
        &self.current
    }

    pub fn prev(&mut self) -> &SkinRef {
        self.preset = (self.preset + PRESET_SKIN_COUNT - 1) % PRESET_SKIN_COUNT;
        self.current = SkinRef::Preset(self.preset);
        &self.current
    }

    /// Use an uploaded image
    pub fn set_custom(&mut self, image_data_uri: String) -> Result<()> {
        if !is_image_data_uri(&image_data_uri) {
            return Err(Error::InvalidSkinImage);
        }
        self.current = SkinRef::Custom(image_data_uri);
        Ok(())
    }

    /// Ask `generator` for a hero; on any failure the selection is unchanged
    pub fn generate<G: HeroImageGenerator + ?Sized>(
        &mut self,
        generator: &mut G,
        prompt: &str,
    ) -> Result<&SkinRef> {
        if prompt.trim().is_empty() {
            return Err(Error::SkinGeneration("empty prompt".into()));
        }
        let request = GenerateHeroRequest::new(prompt);
        let hero = generator.generate(&request).inspect_err(|e| {
            log::warn!("Hero generation failed: {}", e);
        })?;
        self.set_custom(hero.image_data_uri)?;
        log::info!("Generated custom hero skin");
        Ok(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedGenerator(Result<GeneratedHero>);

    impl HeroImageGenerator for FixedGenerator {
        fn generate(&mut self, request: &GenerateHeroRequest) -> Result<GeneratedHero> {
            assert!(request.model_prompt().ends_with("a knight"));
            match &self.0 {
                Ok(hero) => Ok(hero.clone()),
                Err(_) => Err(Error::SkinGeneration("no media returned".into())),
            }
        }
    }

    #[test]
    fn test_cycle_presets() {
        let mut selector = SkinSelector::new(0);
        assert_eq!(selector.prev(), &SkinRef::Preset(3));
        assert_eq!(selector.next(), &SkinRef::Preset(0));
        assert_eq!(selector.next(), &SkinRef::Preset(1));
    }

    #[test]
    fn test_data_uri_validation() {
        assert!(is_image_data_uri("data:image/png;base64,iVBORw0KGgo="));
        assert!(!is_image_data_uri("data:text/plain;base64,aGk="));
        assert!(!is_image_data_uri("https://example.com/hero.png"));
        assert!(!is_image_data_uri("data:image/png;base64,"));
    }

    #[test]
    fn test_generation_success_selects_custom() {
        let mut selector = SkinSelector::new(1);
        let uri = "data:image/png;base64,AAAA".to_string();
        let mut generator = FixedGenerator(Ok(GeneratedHero {
            image_data_uri: uri.clone(),
        }));
        let skin = selector.generate(&mut generator, "a knight").unwrap();
        assert_eq!(skin, &SkinRef::Custom(uri));
    }

    #[test]
    fn test_generation_failure_keeps_previous_skin() {
        let mut selector = SkinSelector::new(2);
        let mut failing = FixedGenerator(Err(Error::SkinGeneration(String::new())));
        assert!(selector.generate(&mut failing, "a knight").is_err());
        assert_eq!(selector.current(), &SkinRef::Preset(2));

        let mut garbage = FixedGenerator(Ok(GeneratedHero {
            image_data_uri: "not-an-image".into(),
        }));
        assert!(matches!(
            selector.generate(&mut garbage, "a knight"),
            Err(Error::InvalidSkinImage)
        ));
        assert_eq!(selector.current(), &SkinRef::Preset(2));
    }

    #[test]
    fn test_preset_color_fallback() {
        assert_eq!(SkinRef::Preset(9).preset_color(), Some(PRESET_SKINS[0]));
        assert_eq!(SkinRef::Custom("x".into()).preset_color(), None);
    }
}
