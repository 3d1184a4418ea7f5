use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;
use z85_blocks::{decode_uuid, encode_uuid, encoded_len, decoded_len, z85dec, z85enc};

#[derive(Parser, Debug)]
struct Args {
    #[arg()]
    input: Option<String>,

    /// Decode instead of encode
    #[arg(short, long)]
    decode: bool,

    /// Convert between UUID text and its 20 character form
    #[arg(short, long)]
    uuid: bool,
}

fn read_input(path: Option<&str>) -> io::Result<Vec<u8>> {
    let mut reader = match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)) as Box<dyn Read>,
        None => Box::new(BufReader::new(io::stdin())) as Box<dyn Read>,
    };
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

fn run(args: &Args, input: Vec<u8>) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if args.uuid {
        let text = String::from_utf8(input)?;
        let text = text.trim();
        return if args.decode {
            Ok(format!("{}\n", decode_uuid(text)?.hyphenated()).into_bytes())
        } else {
            Ok(format!("{}\n", encode_uuid(&Uuid::parse_str(text)?)).into_bytes())
        };
    }

    if args.decode {
        let src: Vec<u8> = input.into_iter().filter(|b| *b != b'\n' && *b != b'\r').collect();
        let mut dst = vec![0u8; decoded_len(src.len())];
        z85dec(&src, &mut dst)?;
        Ok(dst)
    } else {
        let mut dst = vec![0u8; encoded_len(input.len())];
        z85enc(&input, &mut dst)?;
        dst.push(b'\n');
        Ok(dst)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let input = match read_input(args.input.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!("z85: cannot read {}: {}", args.input.as_deref().unwrap_or("stdin"), e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(bytes = input.len(), decode = args.decode, uuid = args.uuid, "read input");

    let output = match run(&args, input) {
        Ok(output) => output,
        Err(e) => {
            tracing::error!("z85: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut writer = BufWriter::new(io::stdout());
    if let Err(e) = writer.write_all(&output).and_then(|_| writer.flush()) {
        tracing::error!("z85: write error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
