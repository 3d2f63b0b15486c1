use clap::{App, AppSettings, Arg, ErrorKind};
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: compute_sales priceCatalogue.json salesRecord.json";
pub const DEFAULT_OUTPUT: &str = "SalesResults.txt";

#[derive(Debug, PartialEq)]
pub struct Args {
    pub price_catalogue: PathBuf,
    pub sales_record: PathBuf,
    pub output: PathBuf,
}

impl Args {
    /// Parse the process arguments. Anything other than exactly two paths
    /// prints the usage line and exits with status 1.
    pub fn parse() -> Self {
        match Self::try_parse_from(std::env::args_os()) {
            Ok(args) => args,
            Err(_) => {
                println!("{}", USAGE);
                std::process::exit(1);
            }
        }
    }

    /// Parse an argument list whose first entry is the program name. The
    /// report is always written to `SalesResults.txt`.
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = itr.into_iter().map(Into::into).collect();
        if argv.len() != 3 {
            return Err(clap::Error::with_description(
                "expected exactly two arguments",
                ErrorKind::WrongNumberOfValues,
            ));
        }

        // Paths may start with '-', and --help/--version are ordinary values.
        let matches = App::new("compute_sales")
            .setting(AppSettings::DisableHelpFlags)
            .setting(AppSettings::DisableVersion)
            .setting(AppSettings::AllowLeadingHyphen)
            .arg(Arg::with_name("price_catalogue")
                .takes_value(true).required(true).index(1).help("path of the JSON price catalogue"))
            .arg(Arg::with_name("sales_record")
                .takes_value(true).required(true).index(2).help("path of the JSON sales record"))
            .get_matches_from_safe(argv)?;

        Ok(Self {
            price_catalogue: PathBuf::from(matches.value_of_os("price_catalogue").unwrap_or_default()),
            sales_record: PathBuf::from(matches.value_of_os("sales_record").unwrap_or_default()),
            output: PathBuf::from(DEFAULT_OUTPUT),
        })
    }
}
