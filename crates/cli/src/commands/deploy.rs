//! The `deploy` command — prints the manual deployment steps.
//!
//! Network integration is deliberately out of scope; the generated
//! deployment script is meant to be run through hardhat or truffle.

use std::path::Path;

pub fn run(contract: &Path, network: &str) {
    println!("Deploying contract {} to {network}...", contract.display());
    println!();
    println!("To deploy manually, run:");
    println!("  npx hardhat run {} --network {network}", contract.display());
    println!("or");
    println!("  truffle migrate --network {network}");
}
