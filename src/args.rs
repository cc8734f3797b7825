use clap::Parser;

#[derive(Parser)]
#[command(name = "random_groups", version)]
#[command(about = "Generate a random sequence of 0..n and split it into g sorted groups")]
#[command(after_help = "Example: random_groups -n 10 -g 4 -d \",\"")]
pub struct Args {
    /// Number of elements
    #[arg(short = 'n', long, default_value_t = 10, allow_negative_numbers = true)]
    pub max_number: i64,

    /// Number of groups
    #[arg(short = 'g', long, default_value_t = 4, allow_negative_numbers = true)]
    pub group_count: i64,

    /// Delimiter placed between the numbers of a group
    #[arg(short = 'd', long, default_value = "\t", allow_hyphen_values = true)]
    pub delimiter: String,

    /// Seed for a reproducible shuffle
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Output verbose log on stderr
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["random_groups"]).unwrap();

        assert_eq!(args.max_number, 10);
        assert_eq!(args.group_count, 4);
        assert_eq!(args.delimiter, "\t");
        assert_eq!(args.seed, None);
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "random_groups", "-n", "7", "-g", "6", "-d", "@", "-s", "12", "-v",
        ])
        .unwrap();

        assert_eq!(args.max_number, 7);
        assert_eq!(args.group_count, 6);
        assert_eq!(args.delimiter, "@");
        assert_eq!(args.seed, Some(12));
        assert!(args.verbose);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = Args::try_parse_from(["random_groups", "-n", "-1", "-g", "-3", "-d", "-"])
            .unwrap();

        assert_eq!(args.max_number, -1);
        assert_eq!(args.group_count, -3);
        assert_eq!(args.delimiter, "-");
    }
}
