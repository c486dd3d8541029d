pub mod backup;

use crate::error::MediavaultError;

pub fn exit_for_error(err: &MediavaultError) -> ! {
    println!("{}", err);
    std::process::exit(2);
}
