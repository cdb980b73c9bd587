use clap::{Parser, Subcommand};
use labrec_core::{read_record_file, write_record_docx};
use labrec_qr::{create_qr_code, DEFAULT_QR_SIZE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "labrec")]
#[command(about = "Lab record generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a lab record document from a JSON record file
    Generate {
        /// Path to a JSON file with course_title, student_name, register_number, experiments
        input: PathBuf,
        /// Directory to write `{register_number}_Lab_Record.docx` into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Render a URL as a PNG QR code
    Qr {
        /// URL to encode
        url: String,
        /// Edge length of the output image in pixels
        #[arg(long, default_value_t = DEFAULT_QR_SIZE)]
        size: u32,
        /// Output PNG path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { input, out_dir }) => {
            let record = read_record_file(&input)?;
            let path = write_record_docx(&record, &out_dir)?;
            println!(
                "Wrote {} experiment(s) for {} to {}",
                record.experiments.len(),
                record.register_number,
                path.display()
            );
        }
        Some(Commands::Qr { url, size, out }) => {
            let png = create_qr_code(&url, size)?;
            std::fs::write(&out, png)?;
            println!("Wrote {}x{} QR code to {}", size, size, out.display());
        }
        None => {
            println!("Use 'labrec --help' for commands");
        }
    }

    Ok(())
}
