use clap::Parser;
use dhmm::io::{observation_path, read_observations, write_observations};
use dhmm::prelude::*;
use dhmm::utils::timer;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(about, version)]
struct Opts {
    /// Basename of the model. `<basename>.trans` and `<basename>.emit` are read.
    basename: PathBuf,
    /// Sample a sequence of length n and write its observations
    /// into `<basename>_sequence.obs`
    #[clap(long)]
    generate: Option<usize>,
    /// Random seed used in sampling
    #[clap(long, default_value_t = 0)]
    seed: u64,
    /// Observation file to decode the last state with the Forward algorithm
    #[clap(long)]
    forward: Option<PathBuf>,
    /// Observation file to decode the state path with the Viterbi algorithm
    #[clap(long)]
    viterbi: Option<PathBuf>,
    /// Comma-separated observations decoded with both algorithms
    #[clap(long, use_value_delimiter = true, value_delimiter = ',')]
    obs: Vec<String>,
    /// Output decoding results in JSON
    #[clap(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let opts: Opts = Opts::parse();
    println!("# started_at={}", chrono::Local::now());
    println!("# opts={:?}", opts);
    if let Err(e) = run(&opts) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    println!("# finished_at={}", chrono::Local::now());
}

fn run(opts: &Opts) -> Result<()> {
    let hmm = HmmModel::from_files(&opts.basename)?;
    info!("states={:?}", hmm.states());

    if let Some(n) = opts.generate {
        let sequence = hmm.sample_from_seed(n, opts.seed)?;
        print!("{}", sequence);
        let path = observation_path(&opts.basename);
        write_observations(&path, &sequence.observations)?;
        info!("observations written to {}", path.display());
    }
    if let Some(path) = &opts.forward {
        let observations = read_observations(path)?;
        report_forward(&hmm, &observations, opts.json)?;
    }
    if let Some(path) = &opts.viterbi {
        let observations = read_observations(path)?;
        report_viterbi(&hmm, &observations, opts.json)?;
    }
    if !opts.obs.is_empty() {
        let observations: Vec<Symbol> = opts.obs.iter().map(Symbol::new).collect();
        report_forward(&hmm, &observations, opts.json)?;
        report_viterbi(&hmm, &observations, opts.json)?;
    }
    Ok(())
}

fn report_forward(hmm: &HmmModel, observations: &[Symbol], json: bool) -> Result<()> {
    let (result, t) = timer(|| -> Result<(State, Prob)> {
        Ok((hmm.forward(observations)?, hmm.full_prob(observations)?))
    });
    let (state, p_x) = result?;
    info!("forward took {}ms", t);
    if json {
        let value = serde_json::json!({ "forward": state, "full_prob": p_x });
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("forward: {} (P(x)={})", state, p_x);
    }
    Ok(())
}

fn report_viterbi(hmm: &HmmModel, observations: &[Symbol], json: bool) -> Result<()> {
    let (path, t) = timer(|| hmm.viterbi_path(observations));
    let path = path?;
    info!("viterbi took {}ms", t);
    if json {
        println!("{}", serde_json::to_string(&path)?);
    } else {
        let states: Vec<&str> = path.states.iter().map(|s| s.as_str()).collect();
        println!("viterbi: {} (P={})", states.join(" "), path.prob);
    }
    Ok(())
}
