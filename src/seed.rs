use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::{Brand, BrandStatus, Founder};
use crate::error::Result;
use crate::media::{AssetKind, MediaStore};
use crate::storage::CatalogStore;

/// Hero image filename used when a brand record does not name one.
pub const PLACEHOLDER_HERO: &str = "placeholder_hero.jpg";

/// One brand entry in the literal seed dataset. Filenames are resolved under
/// the assets root at load time; `hero_filename: None` falls back to
/// [`PLACEHOLDER_HERO`].
pub struct BrandSeed {
    pub name: &'static str,
    pub logo_filename: Option<&'static str>,
    pub hero_filename: Option<&'static str>,
    pub one_liner: &'static str,
    pub description: &'static str,
    pub launch_date: Option<NaiveDate>,
    pub status: BrandStatus,
    pub website_url: Option<&'static str>,
    pub sort_order: u32,
}

pub struct FounderSeed {
    pub name: &'static str,
    pub role: &'static str,
    pub photo_filename: Option<&'static str>,
    pub bio: &'static str,
    pub vision_quote: Option<&'static str>,
    pub linkedin_url: Option<&'static str>,
    pub twitter_url: Option<&'static str>,
    pub sort_order: u32,
}

pub struct SeedDataset {
    pub brands: Vec<BrandSeed>,
    pub founders: Vec<FounderSeed>,
}

/// What a seed run did, for operator reporting.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub brands_created: usize,
    pub founders_created: usize,
    /// Expected asset paths that were not found (attachment skipped).
    pub missing_assets: Vec<PathBuf>,
}

/// Replaces the catalog contents with `dataset`: truncates both collections
/// (releasing their media files), then recreates every record in listed
/// order. Missing asset files are logged and skipped; storage errors abort.
pub fn reset_and_load(
    store: &dyn CatalogStore,
    media: &MediaStore,
    assets_root: &Path,
    dataset: &SeedDataset,
) -> Result<SeedSummary> {
    println!("Seeding data...");
    let mut summary = SeedSummary::default();

    // Clear existing data
    for brand in store.clear_brands()? {
        media.release_brand(&brand)?;
    }
    for founder in store.clear_founders()? {
        media.release_founder(&founder)?;
    }
    info!("Cleared existing catalog records");

    for seed in &dataset.brands {
        let logo = match seed.logo_filename {
            Some(name) => resolve_asset(media, assets_root, AssetKind::BrandLogo, name, &mut summary)?,
            None => None,
        };
        let hero_name = seed.hero_filename.unwrap_or(PLACEHOLDER_HERO);
        let hero_image =
            resolve_asset(media, assets_root, AssetKind::BrandHero, hero_name, &mut summary)?;

        let mut brand = Brand {
            id: None,
            name: seed.name.to_string(),
            logo,
            hero_image,
            one_liner: seed.one_liner.to_string(),
            description: seed.description.to_string(),
            launch_date: seed.launch_date,
            status: seed.status,
            website_url: seed.website_url.map(str::to_string),
            sort_order: seed.sort_order,
        };
        store.create_brand(&mut brand)?;
        summary.brands_created += 1;
        println!("Created brand: {}", brand.name);
    }

    for seed in &dataset.founders {
        let photo = match seed.photo_filename {
            Some(name) => {
                resolve_asset(media, assets_root, AssetKind::FounderPhoto, name, &mut summary)?
            }
            None => None,
        };

        let mut founder = Founder {
            id: None,
            name: seed.name.to_string(),
            role: seed.role.to_string(),
            photo,
            bio: seed.bio.to_string(),
            vision_quote: seed.vision_quote.map(str::to_string),
            linkedin_url: seed.linkedin_url.map(str::to_string),
            twitter_url: seed.twitter_url.map(str::to_string),
            sort_order: seed.sort_order,
        };
        store.create_founder(&mut founder)?;
        summary.founders_created += 1;
        println!("Created founder: {}", founder.name);
    }

    println!("Successfully seeded data");
    Ok(summary)
}

/// Looks up `filename` under the assets-root directory for `kind` and copies
/// it into the media store. A missing file is non-fatal: warn, record it in
/// the summary, and return `None`.
fn resolve_asset(
    media: &MediaStore,
    assets_root: &Path,
    kind: AssetKind,
    filename: &str,
    summary: &mut SeedSummary,
) -> Result<Option<String>> {
    let candidate = assets_root.join(kind.dir()).join(filename);
    if !candidate.is_file() {
        warn!("Asset file not found, skipping attachment: {}", candidate.display());
        summary.missing_assets.push(candidate);
        return Ok(None);
    }
    media.attach(kind, &candidate).map(Some)
}

/// The hand-authored studio dataset. Re-running the loader with this always
/// produces the same logical catalog content.
pub fn dataset() -> SeedDataset {
    SeedDataset {
        brands: vec![
            BrandSeed {
                name: "Lumina",
                logo_filename: Some("lumina.png"),
                hero_filename: Some("lumina_hero.jpg"),
                one_liner: "Intelligence that illuminates your life.",
                description: "Lumina enhances modern living spaces through AI-adaptive lighting solutions that sync with your circadian rhythm. Our flagship panels offer mood-based ambience control, energy efficiency, and seamless smart home integration, making every moment at home visually perfect.",
                launch_date: NaiveDate::from_ymd_opt(2024, 6, 15),
                status: BrandStatus::Revenue,
                website_url: Some("https://lumina.example.com"),
                sort_order: 1,
            },
            BrandSeed {
                name: "Velvet & Oak",
                logo_filename: Some("velvet_oak.png"),
                hero_filename: None,
                one_liner: "Timeless craftsmanship for the modern estate.",
                description: "Velvet & Oak bridges the gap between heritage artistry and contemporary minimalism. Utilizing strictly ethically sourced timber and premium fabrics, each piece is a testament to durability and style. Our collections are curated to transform houses into legacies.",
                launch_date: None,
                status: BrandStatus::Manufacturing,
                website_url: Some("https://velvetandoak.example.com"),
                sort_order: 2,
            },
            BrandSeed {
                name: "Aura Scent",
                logo_filename: Some("aura_scent.png"),
                hero_filename: None,
                one_liner: "Personalized olfactory experiences driven by AI.",
                description: "Aura Scent uses advanced machine learning to design fragrances that are uniquely yours. From home diffusers to personal perfumes, we create sustainable scents that evoke your most cherished memories and elevate your daily rituals.",
                launch_date: None,
                status: BrandStatus::Ideation,
                website_url: None,
                sort_order: 3,
            },
            BrandSeed {
                name: "Urban Harvest",
                logo_filename: Some("urban_harvest.png"),
                hero_filename: None,
                one_liner: "Farm-to-table, right from your living room.",
                description: "Revolutionizing urban nutrition with sleek, automated hydroponic units. Urban Harvest allows anyone to grow pesticide-free, nutrient-rich greens in the comfort of their apartment with zero hassle.",
                launch_date: None,
                status: BrandStatus::Manufacturing,
                website_url: Some("https://urbanharvest.example.com"),
                sort_order: 4,
            },
            BrandSeed {
                name: "Nova Sleep",
                logo_filename: Some("nova_sleep.png"),
                hero_filename: Some("nova_sleep_hero.jpg"),
                one_liner: "Engineering the perfect night's rest.",
                description: "Backed by sleep science, Nova Sleep creates ergonomic mattresses and bedding that adapt to your body temperature and posture. Wake up ready to conquer the day with our restorative technology.",
                launch_date: NaiveDate::from_ymd_opt(2023, 11, 1),
                status: BrandStatus::Revenue,
                website_url: Some("https://novasleep.example.com"),
                sort_order: 5,
            },
        ],
        founders: vec![
            FounderSeed {
                name: "Alex V.",
                role: "CEO & Visionary",
                photo_filename: Some("alex.jpg"),
                bio: "Alex is a serial entrepreneur with a decade of experience in scaling D2C ventures. He previously co-founded 'NextGen Retail,' which was acquired by a Fortune 500 company. Alex believes in the power of vertical integration to deliver unmatched value to consumers. His leadership is defined by a relentless pursuit of innovation and operational excellence.",
                vision_quote: Some("We aren't just building brands; we are crafting the future of how people live, interact, and experience their homes."),
                linkedin_url: Some("https://linkedin.com/in/alex"),
                twitter_url: Some("https://twitter.com/alex"),
                sort_order: 1,
            },
            FounderSeed {
                name: "Sarah J.",
                role: "Chief Design Officer",
                photo_filename: Some("sarah.jpg"),
                bio: "An award-winning industrial designer, Sarah has led design teams at top global design firms. She brings a human-centric approach to Alevate, ensuring that every product is not only functional but also emotionally resonant. Her work focuses on sustainability and the seamless fusion of technology and aesthetics.",
                vision_quote: Some("Design is the silent ambassador of your brand. At Alevate, we ensure that ambassador speaks the language of elegance and utility."),
                linkedin_url: Some("https://linkedin.com/in/sarah"),
                twitter_url: Some("https://twitter.com/sarah"),
                sort_order: 2,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_shape_is_stable() {
        let data = dataset();
        assert_eq!(data.brands.len(), 5);
        assert_eq!(data.founders.len(), 2);

        // Listed order matches the intended display order
        let orders: Vec<u32> = data.brands.iter().map(|b| b.sort_order).collect();
        assert_eq!(orders, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_brand_names_a_logo() {
        for brand in dataset().brands {
            assert!(brand.logo_filename.is_some(), "brand {} has no logo", brand.name);
        }
    }
}
