// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner(front_end: &str) {
    // Using a raw string literal for the multi-line banner
    let banner = r#"
     _      _                                    _     _              _
  __| | ___| |__  _   _  __ _    __ _ ___ ___(_)___| |_ __ _ _ __ | |_
 / _` |/ _ \ '_ \| | | |/ _` |  / _` / __/ __| / __| __/ _` | '_ \| __|
| (_| |  __/ |_) | |_| | (_| | | (_| \__ \__ \ \__ \ || (_| | | | | |_
 \__,_|\___|_.__/ \__,_|\__, |  \__,_|___/___/_|___/\__\__,_|_| |_|\__|
                        |___/
"#;
    println!("{}", banner);
    println!("    🐞 Automated Debugging Assistant ({}) v{}\n", front_end, env!("CARGO_PKG_VERSION"));
}
