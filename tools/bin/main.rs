use std::process::exit;

use clap::{crate_description, crate_version, App};

use polysolve_tools::command_solve;

fn main() {
    let matches = App::new("polysolve")
        .about(crate_description!())
        .version(crate_version!())
        .args(&command_solve::get_arguments())
        .get_matches();

    match command_solve::run(&matches) {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(err) => {
            eprintln!("{:?}", err);
            exit(2);
        }
    }
}
