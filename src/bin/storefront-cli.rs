use clap::{Parser, Subcommand};
use serde_json::Value;

use storefront_backend::catalog::ProductList;
use storefront_backend::submission::SubmissionRequest;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Command-line client for the storefront backend", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the server banner
    Ping,
    /// List the product catalog
    Products,
    /// Submit a name/email pair
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Ping => {
            let res = client.get(format!("{}/", base)).send().await?;
            println!("{}", res.text().await?);
        }
        Commands::Products => {
            let res = client.get(format!("{}/api/products", base)).send().await?;
            if !res.status().is_success() {
                return print_error(res).await;
            }
            let list: ProductList = res.json().await?;
            for product in list.products {
                println!("{:>3}  {:<32} {:>8}", product.id, product.name, product.price);
            }
        }
        Commands::Submit { name, email } => {
            let res = client
                .post(format!("{}/submit", base))
                .json(&SubmissionRequest::new(name, email))
                .send()
                .await?;
            let status = res.status();
            let json: Value = res.json().await?;
            if !status.is_success() {
                eprintln!("Error: server returned status {}", status);
            }
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}

async fn print_error(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Error: server returned status {}", res.status());
    if let Ok(text) = res.text().await {
        eprintln!("Response: {}", text);
    }
    Ok(())
}
