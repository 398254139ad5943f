use std::{
    io::BufRead as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "wavatar", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one avatar as a PNG.
    Avatar(AvatarArgs),
    /// Print the derived parameters as JSON (no layer assets needed).
    Params(ParamsArgs),
    /// Render one avatar per email address listed in a file, in parallel.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Input bytes given as hex, e.g. an MD5 or SHA-256 digest.
    #[arg(long)]
    hex: Option<String>,

    /// Email address; hashed with SHA-256 after trimming and lower-casing.
    #[arg(long)]
    email: Option<String>,

    /// Raw UTF-8 text used as the input bytes.
    #[arg(long)]
    text: Option<String>,
}

impl InputArgs {
    fn bytes(&self) -> anyhow::Result<Vec<u8>> {
        match (&self.hex, &self.email, &self.text) {
            (Some(h), _, _) => decode_hex(h),
            (_, Some(e), _) => Ok(email_digest(e)),
            (_, _, Some(t)) => Ok(t.as_bytes().to_vec()),
            (None, None, None) => anyhow::bail!("one of --hex, --email or --text is required"),
        }
    }
}

#[derive(Parser, Debug)]
struct AvatarArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Directory holding the layer PNGs (`fade1.png`, `mask1.png`, ...).
    #[arg(long)]
    parts: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ParamsArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory holding the layer PNGs.
    #[arg(long)]
    parts: PathBuf,

    /// Text file with one email address per line.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory; files are named by the email's SHA-256 digest.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Avatar(args) => cmd_avatar(args),
        Command::Params(args) => cmd_params(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_avatar(args: AvatarArgs) -> anyhow::Result<()> {
    let input = args.input.bytes()?;
    let layers = wavatar::DirLayerSource::new(&args.parts);
    let raster = wavatar::generate(&input, &layers)?;
    write_png(&raster, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_params(args: ParamsArgs) -> anyhow::Result<()> {
    let input = args.input.bytes()?;
    let params = wavatar::AvatarParams::derive(&input);
    let layers: Vec<String> = params.layers().iter().map(|k| k.to_string()).collect();

    let out = serde_json::json!({
        "seed": wavatar::Seed::from_input(&input),
        "params": params,
        "layers": layers,
        "background_rgb": params.background_color(),
        "wave_rgb": params.wave_color(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let f = std::fs::File::open(&args.in_path)
        .with_context(|| format!("open email list '{}'", args.in_path.display()))?;
    let emails: Vec<String> = std::io::BufReader::new(f)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("read email list '{}'", args.in_path.display()))?
        .into_iter()
        .filter(|l| !l.trim().is_empty())
        .collect();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let layers = wavatar::CachedLayerSource::new(wavatar::DirLayerSource::new(&args.parts));
    let failures: Vec<(String, anyhow::Error)> = emails
        .par_iter()
        .filter_map(|email| {
            let digest = email_digest(email);
            let out = args.out_dir.join(format!("{}.png", hex_string(&digest)));
            let res = wavatar::generate(&digest, &layers)
                .map_err(anyhow::Error::from)
                .and_then(|raster| write_png(&raster, &out));
            res.err().map(|e| (email.clone(), e))
        })
        .collect();

    for (email, err) in &failures {
        eprintln!("failed '{email}': {err:#}");
    }
    eprintln!(
        "wrote {} of {} avatars to {}",
        emails.len() - failures.len(),
        emails.len(),
        args.out_dir.display()
    );
    if !failures.is_empty() {
        anyhow::bail!("{} avatars failed", failures.len());
    }
    Ok(())
}

fn write_png(raster: &wavatar::Raster, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let bytes = wavatar::encode_png(raster)?;
    std::fs::write(out, bytes).with_context(|| format!("write png '{}'", out.display()))
}

fn email_digest(email: &str) -> Vec<u8> {
    sha2::Sha256::digest(email.trim().to_lowercase().as_bytes()).to_vec()
}

fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}

fn decode_hex(s: &str) -> anyhow::Result<Vec<u8>> {
    let s = s.trim();
    if !s.len().is_multiple_of(2) {
        anyhow::bail!("hex input must have an even number of digits");
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            s.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .with_context(|| format!("invalid hex digits at offset {i}"))
        })
        .collect()
}
