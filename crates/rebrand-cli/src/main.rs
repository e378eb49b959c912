mod mapping;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rebrand_core::{
    apply, extract_file, output_file_name, ImageResource, Inventory, RebrandSettings,
    ReplacementSession,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::mapping::MappingFile;

#[derive(Parser)]
#[command(name = "rebrand")]
#[command(about = "Inventory and rewrite colors, fonts and images in OOXML documents", long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Settings JSON file; missing fields take their defaults
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the colors, fonts and images of a document
    Inspect {
        file: PathBuf,

        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,

        /// Write every image with readable bytes into this directory
        #[arg(long)]
        dump_images: Option<PathBuf>,

        /// Render slide previews into this directory (presentations only)
        #[arg(long)]
        previews: Option<PathBuf>,
    },
    /// Apply a mapping file and write the rebranded document
    Apply {
        file: PathBuf,

        /// Mapping JSON: {"colors": {..}, "fonts": {..}, "images": {..}, "theme_images": {..}}
        #[arg(short, long)]
        mapping: PathBuf,

        /// Output path; defaults to the input name with the configured suffix
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct InventoryReport<'a> {
    format: rebrand_core::DocumentFormat,
    text_colors: Vec<String>,
    shape_colors: Vec<String>,
    background_colors: Vec<String>,
    fonts: &'a std::collections::BTreeSet<String>,
    images: &'a [ImageResource],
    previews: Vec<usize>,
}

impl<'a> InventoryReport<'a> {
    fn new(inventory: &'a Inventory) -> Self {
        let hex = |set: &std::collections::BTreeSet<rebrand_core::Color>| {
            set.iter().map(|c| c.to_string()).collect()
        };
        Self {
            format: inventory.format,
            text_colors: hex(&inventory.text_colors),
            shape_colors: hex(&inventory.shape_colors),
            background_colors: hex(&inventory.background_colors),
            fonts: &inventory.fonts,
            images: &inventory.images,
            previews: inventory.previews.keys().copied().collect(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => RebrandSettings::default(),
    };

    match cli.command {
        Commands::Inspect {
            file,
            json,
            dump_images,
            previews,
        } => {
            if previews.is_some() {
                settings.render_previews = true;
            }
            let inventory = load_inventory(&file, &settings)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&InventoryReport::new(&inventory))?);
            } else {
                print_inventory(&inventory);
            }

            if let Some(dir) = dump_images {
                let written = dump_image_bytes(&inventory, &dir)?;
                eprintln!("Wrote {} images to {}", written, dir.display());
            }
            if let Some(dir) = previews {
                std::fs::create_dir_all(&dir)
                    .with_context(|| format!("Failed to create {}", dir.display()))?;
                for (slide, jpeg) in &inventory.previews {
                    let path = dir.join(format!("slide{}.jpg", slide));
                    std::fs::write(&path, jpeg)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
                eprintln!("Wrote {} previews to {}", inventory.previews.len(), dir.display());
            }
        }
        Commands::Apply {
            file,
            mapping,
            output,
        } => {
            let mapping = MappingFile::load(&mapping)?;
            let mut session = mapping.session()?;
            let inventory = load_inventory(&file, &settings)?;
            drop_unknown_images(&mut session, &mapping, &inventory);
            let suffix = inventory.settings().output_suffix.clone();

            let rebranded = apply(
                inventory,
                &mapping.colors,
                &mapping.fonts,
                &session.replacements(),
            )
            .with_context(|| format!("Failed to rebrand {}", file.display()))?;

            let output = output.unwrap_or_else(|| {
                PathBuf::from(output_file_name(&file.to_string_lossy(), &suffix))
            });
            std::fs::write(&output, rebranded)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("{}", output.display());
        }
    }

    Ok(())
}

fn load_settings(path: &Path) -> Result<RebrandSettings> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid settings file: {}", path.display()))
}

fn load_inventory(path: &Path, settings: &RebrandSettings) -> Result<Inventory> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    extract_file(&name, &bytes, settings)
        .with_context(|| format!("Failed to inventory {}", path.display()))
}

/// Uids that name neither an inventoried resource nor a media path cannot
/// match anything in the document.
fn drop_unknown_images(session: &mut ReplacementSession, mapping: &MappingFile, inventory: &Inventory) {
    for uid in mapping.images.keys() {
        let known = uid.contains("/media/") || inventory.images.iter().any(|image| &image.uid == uid);
        if !known && session.forget_image(uid) {
            log::warn!("mapping names unknown image '{}'; ignoring it", uid);
        }
    }
}

fn print_inventory(inventory: &Inventory) {
    println!("Format: {}", inventory.format);
    for (label, set) in [
        ("Text colors", &inventory.text_colors),
        ("Shape colors", &inventory.shape_colors),
        ("Background colors", &inventory.background_colors),
    ] {
        let colors: Vec<String> = set.iter().map(|c| c.to_string()).collect();
        println!("{} ({}): {}", label, colors.len(), colors.join(", "));
    }
    let fonts: Vec<&str> = inventory.fonts.iter().map(String::as_str).collect();
    println!("Fonts ({}): {}", fonts.len(), fonts.join(", "));

    println!("Images ({}):", inventory.images.len());
    let mut group = None;
    for image in &inventory.images {
        if group != Some(image.group_label.as_str()) {
            println!("  [{}]", image.group_label);
            group = Some(image.group_label.as_str());
        }
        let size = image
            .raw_bytes
            .as_ref()
            .map(|b| format!("{} bytes", b.len()))
            .unwrap_or_else(|| "unavailable".to_string());
        println!("    {}  {}  ({})", image.uid, image.display_name, size);
    }
}

/// File names are derived from the uid so that a dumped directory can be
/// edited and fed back through a mapping file.
fn dump_image_bytes(inventory: &Inventory, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let mut written = 0;
    for image in &inventory.images {
        let Some(bytes) = &image.raw_bytes else {
            continue;
        };
        let extension = image
            .media_path
            .as_deref()
            .and_then(rebrand_core::package::archive::entry_extension)
            .unwrap_or(".bin");
        let file_name: String = image
            .uid
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.' { c } else { '_' })
            .collect();
        let path = dir.join(format!("{}{}", file_name, extension));
        std::fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        written += 1;
    }
    Ok(written)
}
