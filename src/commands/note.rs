//! Platform command info banner

const RELEASE_DATE: &str = "2026.08.06";

pub fn run() {
    let version = env!("CARGO_PKG_VERSION");
    println!("========================{{PLATFORM COMMAND INFO}}========================================");
    println!("* NAME:          bmcdbg");
    println!("* DESCRIPTION:   Commands that could be used to debug or validate BMC hardware.");
    println!("* AUTHOR:        BMC platform team");
    println!("* DATE/VERSION:  {} - v{}", RELEASE_DATE, version);
    println!("* CHIP:          AST1030");
    println!("* Note:          1.Support commands status:");
    println!("                   + GPIO       O");
    println!("                   + SENSOR     O");
    println!("                   + I2C_SLAVE  X");
    println!("                 2.Using these commands on other boards may cause problems!");
    println!("========================{{PLATFORM COMMAND INFO}}========================================");
}
