use acme_rsakeys::error::KeyResult;
use acme_rsakeys::KeyBundle;
use std::env;
use std::fmt::Display;
use std::fs;
use std::path::Path;

fn print_fingerprint<P: Display + AsRef<Path>>(path: P) -> KeyResult<()> {
    print!("{}: ", path);
    match fs::read_to_string(path) {
        Ok(s) => {
            let bundle = KeyBundle::from_pem(&s)?;
            println!("SHA256:{}", bundle.public_key_sha256());
            println!("MD5:{}", bundle.public_key_md5());
        }
        Err(e) => {
            println!("{}", e);
        }
    }
    Ok(())
}

fn main() -> KeyResult<()> {
    let mut argv = env::args();
    argv.next();
    for arg in argv {
        print_fingerprint(&arg)?;
    }
    Ok(())
}
