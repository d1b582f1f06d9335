//! Demo 2: Account Summary
//!
//! Showcases: signed requests, cursor pagination, typed transactions
//!
//! Run: COINBASE_API_KEY=... COINBASE_API_SECRET=... cargo run --bin account_summary

use coinbase_rest::types::TransactionKind;
use coinbase_rest::{CoinbaseClient, QueryParams};
use colored::*;
use tracing_subscriber::EnvFilter;

/// Transactions shown per account
const RECENT: usize = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT SUMMARY".cyan().bold());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CoinbaseClient::from_env()?;

    let me = client.users().get_self().await?;
    println!(
        "{} Signed in as {} ({})\n",
        "✓".green(),
        me.user.name.as_deref().unwrap_or("unknown").bold(),
        me.native_currency.as_deref().unwrap_or("-")
    );

    let accounts = client.accounts().list_accounts(None).await?;
    let funded: Vec<_> = accounts
        .iter()
        .filter(|account| !account.balance.amount.is_zero())
        .collect();

    println!(
        "  {} accounts, {} with a balance\n",
        accounts.len(),
        funded.len()
    );

    let query = QueryParams::new().with("limit", RECENT.to_string());
    for account in funded {
        println!(
            "  {} {} {}",
            account.name.cyan().bold(),
            account.balance.amount.normalize(),
            account.balance.currency
        );

        let transactions = client
            .transactions()
            .list_transactions(&account.id, Some(&query))
            .await?;

        for tx in transactions.iter().take(RECENT) {
            let counterpart = match &tx.kind {
                TransactionKind::Send { to: Some(to), .. } => to.resource.clone(),
                TransactionKind::Request { to } => to.email.clone(),
                _ => String::new(),
            };
            let amount = format!("{:+}", tx.amount.amount.normalize());
            let amount = if tx.amount.amount.is_sign_negative() {
                amount.red()
            } else {
                amount.green()
            };

            println!(
                "      {:<8} {:>16} {:<10} {}",
                tx.type_name(),
                amount,
                tx.status.dimmed(),
                counterpart
            );
        }
        println!();
    }

    Ok(())
}
