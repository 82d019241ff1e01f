use sign_tools::{slice, GridSpec, SliceError};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct Opts {
    #[structopt(default_value = "public/signs.png")]
    image: std::path::PathBuf,
    #[structopt(default_value = "public/signs")]
    output: std::path::PathBuf,
    #[structopt(long, default_value = "5")]
    rows: u32,
    #[structopt(long, default_value = "6")]
    cols: u32,
}

fn main() {
    let opts = Opts::from_args();

    let result = GridSpec::new(opts.rows, opts.cols).and_then(|grid| {
        slice(&opts.image, &opts.output, grid, |letter| {
            println!("Saved {}.png", letter);
        })
    });

    match result {
        Ok(()) => println!("Slicing complete."),
        Err(err @ SliceError::DecoderUnavailable(_)) => println!("{}", err),
        Err(err) => println!("Error: {}", err),
    }
}
