use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use qrpaint::{
    CanvasOpts, ColorInput, QrCanvas, RenderParams, RenderStyle, encode_matrix,
};

#[derive(Parser, Debug)]
#[command(name = "qrpaint", version, about = "Render a styled QR code to PNG")]
struct Cli {
    /// Text or URL to encode.
    payload: String,

    /// JSON render parameters (camelCase keys); flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Symbol side in logical pixels, quiet zone excluded.
    #[arg(long)]
    size: Option<f64>,

    /// Quiet zone width in logical pixels.
    #[arg(long)]
    quiet_zone: Option<f64>,

    /// Module style: `squares` or `dots`.
    #[arg(long)]
    style: Option<String>,

    /// Foreground color.
    #[arg(long)]
    fg: Option<String>,

    /// Background color.
    #[arg(long)]
    bg: Option<String>,

    /// Error correction level: L, M, Q or H.
    #[arg(long)]
    ec: Option<String>,

    /// Logo path, `data:` URI or URL.
    #[arg(long)]
    logo: Option<String>,

    #[arg(long)]
    logo_width: Option<f64>,

    #[arg(long)]
    logo_height: Option<f64>,

    #[arg(long)]
    logo_opacity: Option<f64>,

    #[arg(long)]
    logo_padding: Option<f64>,

    /// Logo pad shape: `square` or `circle`.
    #[arg(long)]
    logo_padding_style: Option<String>,

    /// Clear the modules under the logo.
    #[arg(long)]
    remove_behind_logo: bool,

    /// Device pixel scale.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Output PNG path.
    #[arg(long, default_value = "qrcode.png")]
    out: PathBuf,

    /// Print a `data:image/png;base64,...` URL to stdout instead of writing a file.
    #[arg(long)]
    data_url: bool,
}

impl Cli {
    fn params(&self) -> anyhow::Result<RenderParams> {
        let mut p = match &self.config {
            Some(path) => RenderParams::from_path(path)?,
            None => RenderParams::default(),
        };

        if self.size.is_some() {
            p.size = self.size;
        }
        if self.quiet_zone.is_some() {
            p.quiet_zone = self.quiet_zone;
        }
        if let Some(style) = &self.style {
            p.qr_style = Some(style.clone());
        }
        if let Some(fg) = &self.fg {
            p.fg_color = Some(ColorInput::from(fg.as_str()));
        }
        if let Some(bg) = &self.bg {
            p.bg_color = Some(ColorInput::from(bg.as_str()));
        }
        if let Some(ec) = &self.ec {
            p.ec_level = Some(ec.clone());
        }
        if let Some(logo) = &self.logo {
            p.logo_image = Some(logo.clone());
        }
        if self.logo_width.is_some() {
            p.logo_width = self.logo_width;
        }
        if self.logo_height.is_some() {
            p.logo_height = self.logo_height;
        }
        if self.logo_opacity.is_some() {
            p.logo_opacity = self.logo_opacity;
        }
        if self.logo_padding.is_some() {
            p.logo_padding = self.logo_padding;
        }
        if let Some(ps) = &self.logo_padding_style {
            p.logo_padding_style = Some(ps.clone());
        }
        if self.remove_behind_logo {
            p.remove_qr_code_behind_logo = Some(true);
        }
        Ok(p)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let style = RenderStyle::from_params(&cli.params()?);
    let matrix = encode_matrix(&cli.payload, style.ec_level)?;
    let has_logo = style.logo.is_some();

    let mut canvas = QrCanvas::new(
        matrix,
        style,
        CanvasOpts::default().with_device_scale(cli.scale),
    )?;
    if has_logo {
        canvas.add_logo().await.context("composite logo")?;
    }

    if cli.data_url {
        println!("{}", canvas.data_url()?);
        return Ok(());
    }

    let frame = canvas.frame()?;
    if let Some(parent) = cli.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &cli.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", cli.out.display()))?;

    eprintln!("wrote {}", cli.out.display());
    Ok(())
}
