//! casc: inspect and decrypt CASC archive frames
//!
//! Commands:
//!   decrypt <frame> [-o out] [--frame-index N]   - decrypt one encrypted frame
//!   seal <plain> --key-name K --iv HEX [-o out]  - build an encrypted frame
//!   copy <frame> [-o out]                        - passthrough for unencrypted frames
//!   keys list | keys check <name>                - inspect the session keyring
//!   config show                                  - display current configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use casc_core::config::{CascConfig, LogFormat};
use casc_core::{FrameIndex, KeyName};
use casc_crypto::{FrameEnvelope, Session, KEY_SIZE};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "casc",
    version,
    about = "CASC frame decryption toolkit",
    long_about = "casc: decrypt, seal, and copy CASC archive frames using the session keyring"
)]
struct Cli {
    /// Path to casc.toml configuration file
    #[arg(long, short = 'c', env = "CASC_CONFIG", default_value = "casc.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decrypt a single encrypted frame (envelope + ciphertext)
    Decrypt {
        /// File holding the raw frame bytes
        input: PathBuf,
        /// Destination for the plaintext (default: <input>.dec)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Index of the frame within its file
        #[arg(long, short = 'f', default_value_t = 0)]
        frame_index: FrameIndex,
        /// Extra key to register before decrypting, as NAME=HEXKEY (repeatable)
        #[arg(long = "key", value_parser = parse_key_spec)]
        keys: Vec<(KeyName, [u8; KEY_SIZE])>,
    },

    /// Encrypt a plaintext frame under a known key
    Seal {
        /// File holding the plaintext frame bytes
        input: PathBuf,
        /// Destination for the encrypted frame (default: <input>.enc)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Key name to record in the envelope
        #[arg(long)]
        key_name: KeyName,
        /// Base IV, 4 or 8 bytes as hex
        #[arg(long)]
        iv: String,
        /// Index of the frame within its file
        #[arg(long, short = 'f', default_value_t = 0)]
        frame_index: FrameIndex,
        /// Extra key to register before sealing, as NAME=HEXKEY (repeatable)
        #[arg(long = "key", value_parser = parse_key_spec)]
        keys: Vec<(KeyName, [u8; KEY_SIZE])>,
    },

    /// Copy an unencrypted frame verbatim
    Copy {
        input: PathBuf,
        /// Destination (default: <input>.out)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Keyring inspection
    Keys {
        #[command(subcommand)]
        action: KeysAction,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum KeysAction {
    /// List the key names known to a fresh session (never the key bytes)
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Report whether a key name resolves
    Check { name: KeyName },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CascConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;
    init_logging(&config.log.level, config.log.format);

    match cli.command {
        Commands::Decrypt {
            input,
            output,
            frame_index,
            keys,
        } => cmd_decrypt(&config, &input, output.as_deref(), frame_index, &keys),
        Commands::Seal {
            input,
            output,
            key_name,
            iv,
            frame_index,
            keys,
        } => cmd_seal(
            &config,
            &input,
            output.as_deref(),
            key_name,
            &iv,
            frame_index,
            &keys,
        ),
        Commands::Copy { input, output } => cmd_copy(&config, &input, output.as_deref()),
        Commands::Keys { action } => match action {
            KeysAction::List { json } => cmd_keys_list(&config, json),
            KeysAction::Check { name } => cmd_keys_check(&config, name),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(&config, &cli.config),
        },
    }
}

fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Parse `NAME=HEXKEY` (also accepts `NAME:HEXKEY`).
fn parse_key_spec(spec: &str) -> Result<(KeyName, [u8; KEY_SIZE]), String> {
    let (name, key) = spec
        .split_once(['=', ':'])
        .ok_or_else(|| format!("expected NAME=HEXKEY, got '{spec}'"))?;
    let name: KeyName = name
        .parse()
        .map_err(|e| format!("invalid key name '{name}': {e}"))?;
    let mut bytes = [0u8; KEY_SIZE];
    hex::decode_to_slice(key.trim(), &mut bytes)
        .map_err(|e| format!("invalid key for {name}: {e}"))?;
    Ok((name, bytes))
}

fn open_session(config: &CascConfig, keys: &[(KeyName, [u8; KEY_SIZE])]) -> Result<Session> {
    let mut session = Session::open(&config.keyring).context("opening key session")?;
    for (name, key) in keys {
        session
            .add_encryption_key(*name, *key)
            .with_context(|| format!("registering key {name}"))?;
    }
    Ok(session)
}

fn default_output(input: &Path, extension: &str) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

// ── `casc decrypt` ────────────────────────────────────────────────────────────

fn cmd_decrypt(
    config: &CascConfig,
    input: &Path,
    output: Option<&Path>,
    frame_index: FrameIndex,
    keys: &[(KeyName, [u8; KEY_SIZE])],
) -> Result<()> {
    let session = open_session(config, keys)?;
    let frame = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;

    let mut plaintext = vec![0u8; frame.len()];
    let written = session
        .decrypt_frame(&frame, &mut plaintext, frame_index)
        .with_context(|| format!("decrypting frame {frame_index} of {}", input.display()))?;
    plaintext.truncate(written);

    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, "dec"));
    std::fs::write(&dest, &plaintext).with_context(|| format!("writing {}", dest.display()))?;

    println!(
        "decrypted {} → {} ({})",
        input.display(),
        dest.display(),
        fmt_bytes(written as u64)
    );
    Ok(())
}

// ── `casc seal` ───────────────────────────────────────────────────────────────

fn cmd_seal(
    config: &CascConfig,
    input: &Path,
    output: Option<&Path>,
    key_name: KeyName,
    iv_hex: &str,
    frame_index: FrameIndex,
    keys: &[(KeyName, [u8; KEY_SIZE])],
) -> Result<()> {
    let session = open_session(config, keys)?;
    let iv = hex::decode(iv_hex.trim()).context("decoding --iv")?;
    let envelope = FrameEnvelope::salsa20(key_name, &iv)?;

    let plaintext =
        std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let frame = casc_crypto::seal_frame(session.keys()?, &envelope, &plaintext, frame_index)
        .with_context(|| format!("sealing {}", input.display()))?;

    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, "enc"));
    std::fs::write(&dest, &frame).with_context(|| format!("writing {}", dest.display()))?;

    println!(
        "sealed {} → {} (key {key_name}, frame {frame_index}, {})",
        input.display(),
        dest.display(),
        fmt_bytes(frame.len() as u64)
    );
    Ok(())
}

// ── `casc copy` ───────────────────────────────────────────────────────────────

fn cmd_copy(config: &CascConfig, input: &Path, output: Option<&Path>) -> Result<()> {
    let session = open_session(config, &[])?;
    let frame = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;

    let mut copy = vec![0u8; frame.len()];
    let written = session.direct_copy(&frame, &mut copy)?;

    let dest = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input, "out"));
    std::fs::write(&dest, &copy[..written])
        .with_context(|| format!("writing {}", dest.display()))?;

    println!(
        "copied {} → {} ({})",
        input.display(),
        dest.display(),
        fmt_bytes(written as u64)
    );
    Ok(())
}

// ── `casc keys` ───────────────────────────────────────────────────────────────

fn cmd_keys_list(config: &CascConfig, json: bool) -> Result<()> {
    let session = open_session(config, &[])?;
    let keys = session.keys()?;
    let names: Vec<String> = keys.names().iter().map(ToString::to_string).collect();

    if json {
        let doc = serde_json::json!({
            "static_keys": keys.static_len(),
            "extra_capacity": keys.extra_capacity(),
            "names": names,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        for name in &names {
            println!("{name}");
        }
        println!();
        println!(
            "{} keys ({} runtime slots available)",
            names.len(),
            keys.extra_capacity() - keys.extra_len()
        );
    }
    Ok(())
}

fn cmd_keys_check(config: &CascConfig, name: KeyName) -> Result<()> {
    let session = open_session(config, &[])?;
    if session.find_key(name)?.is_some() {
        println!("{name}: known");
        Ok(())
    } else {
        anyhow::bail!("{name}: not in keyring")
    }
}

// ── `casc config show` ────────────────────────────────────────────────────────

fn cmd_config_show(config: &CascConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!(
            "# Configuration: defaults (no file at {})",
            config_path.display()
        );
    }
    println!();
    let rendered = toml::to_string_pretty(config).context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}

fn fmt_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
