use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use prettytable::{Attr, Cell, Row, Table};
use simple_logger::SimpleLogger;
use std::fs;
use std::path::{Path, PathBuf};
use ttfont_bin::config::PreviewSettings;
use ttfont_bin::formats::{DdsContainer, FontAsset, FontFormat, ImageContainerDecoder, RawContainer};
use ttfont_bin::preview::{render_overlay, scale, Selection};

#[derive(Debug, Parser)]
#[clap(name = "ttfont", version = "0.1.0", about = "Inspect TT Games FNT and FT2 font containers")]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser)]
struct GlobalOpts {
    /// Container format (fnt or ft2), detected from the file extension when omitted
    #[clap(short = 'f', long = "format", global = true)]
    format: Option<FontFormat>,
    /// Enable debug logging
    #[clap(short = 'd', long = "debug", global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(arg_required_else_help = true, about = "Show metrics and table sizes of a font")]
    Info { file: PathBuf },
    #[clap(arg_required_else_help = true, about = "List all characters and their glyph rectangles")]
    Chars { file: PathBuf },
    #[clap(arg_required_else_help = true, about = "Write the embedded image container to disk")]
    Extract {
        file: PathBuf,
        /// Defaults to <name>_Image.dds next to the font
        #[clap(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
    #[clap(arg_required_else_help = true, about = "Render the atlas with glyph rectangles highlighted")]
    Preview {
        file: PathBuf,
        #[clap(required = true, short = 'o', long = "output")]
        output: PathBuf,
        /// Only highlight character #N, as numbered by the chars command
        #[clap(short = 'c', long = "char")]
        char: Option<usize>,
        /// Preview settings json file
        #[clap(short = 's', long = "settings")]
        settings: Option<PathBuf>,
        /// Zoom in percent, overrides the settings file
        #[clap(short = 'z', long = "zoom")]
        zoom: Option<u32>,
    },
    #[clap(about = "Print the effective preview settings as json")]
    Settings {
        #[clap(short = 's', long = "settings")]
        settings: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.global_opts.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let format = args.global_opts.format;
    match args.command {
        Commands::Info { file } => {
            let asset = decode(&file, format, &RawContainer)?;
            print_info(&file, &asset);
        }
        Commands::Chars { file } => {
            let asset = decode(&file, format, &RawContainer)?;
            print_chars(&asset);
        }
        Commands::Extract { file, output } => {
            let asset = decode(&file, format, &RawContainer)?;
            let output = output.unwrap_or_else(|| default_image_path(&file));
            fs::write(&output, &asset.image.data)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!("wrote {} bytes to {}", asset.image.data.len(), output.display());
        }
        Commands::Preview {
            file,
            output,
            char,
            settings,
            zoom,
        } => {
            let mut settings = PreviewSettings::load(settings.as_deref())?;
            if let Some(zoom) = zoom {
                settings.zoom = zoom;
            }
            if settings.zoom == 0 {
                return Err(anyhow!("zoom must be larger than 0"));
            }

            let entry = match char {
                Some(0) => return Err(anyhow!("characters are numbered from 1")),
                Some(n) => Some(n - 1),
                None => None,
            };

            let asset = decode(&file, format, &DdsContainer)?;
            let canvas = render_overlay(&asset, Selection::from_settings(&settings, entry), &settings)?;
            let canvas = scale(&canvas, settings.zoom);
            canvas
                .save(&output)
                .with_context(|| format!("cannot write {}", output.display()))?;
            info!("preview written to {}", output.display());
        }
        Commands::Settings { settings } => {
            let settings = PreviewSettings::load(settings.as_deref())?;
            println!("{}", settings.to_json()?);
        }
    }

    Ok(())
}

fn decode(file: &Path, format: Option<FontFormat>, images: &impl ImageContainerDecoder) -> Result<FontAsset> {
    let format = match format {
        Some(format) => format,
        None => FontFormat::from_path(file)?,
    };

    format
        .decode_file(file, images)
        .with_context(|| format!("cannot decode {} as {format}", file.display()))
}

fn default_image_path(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    file.with_file_name(format!("{stem}_Image.dds"))
}

fn print_info(file: &Path, asset: &FontAsset) {
    let unmapped = asset.unicode.len() - asset.mapped_glyphs().count();

    println!("File          : {}", file.display());
    println!("Format        : {}", asset.format);
    println!("Min height    : {}", asset.min_height);
    println!("Base line     : {}", asset.base_line);
    println!("Space width   : {}", asset.space_width);
    if asset.format == FontFormat::Ft2 {
        println!("Sound id      : {:#010x}", asset.snd_id);
        println!("IC gap        : {}", asset.ic_gap);
        println!("Kerning pairs : {}", asset.kerning.len());
    }
    println!("Glyphs        : {}", asset.glyphs.len());
    println!("Characters    : {} ({unmapped} without glyph)", asset.unicode.len());
    println!("Image         : {} bytes", asset.image.data.len());
}

fn print_chars(asset: &FontAsset) {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(Row::new(vec![
        Cell::new("#").with_style(Attr::Bold),
        Cell::new("Char").with_style(Attr::Bold),
        Cell::new("Code").with_style(Attr::Bold),
        Cell::new("Glyph").with_style(Attr::Bold),
        Cell::new("X").with_style(Attr::Bold),
        Cell::new("Y").with_style(Attr::Bold),
        Cell::new("Width").with_style(Attr::Bold),
        Cell::new("Height").with_style(Attr::Bold),
    ]));

    for (n, entry) in asset.unicode.iter().enumerate() {
        let ch = entry
            .character()
            .filter(|ch| !ch.is_control())
            .map(String::from)
            .unwrap_or_default();

        let mut cells = vec![
            Cell::new(&(n + 1).to_string()),
            Cell::new(&ch),
            Cell::new(&format!("U+{:04X}", entry.codepoint)),
            Cell::new(&entry.glyph_index.to_string()),
        ];
        match asset.glyph_for_entry(entry) {
            Some(rect) => {
                for value in [rect.x, rect.y, rect.width, rect.height] {
                    cells.push(Cell::new(&value.to_string()));
                }
            }
            None => cells.push(Cell::new("unmapped")),
        }

        table.add_row(Row::new(cells));
    }

    table.printstd();
}
