use clap::Parser;
use nbandit::cli::{BanditConfig, Options, OutputFormat};
use nbandit::logging::DisplayLogger;
use nbandit::simulation::FrameRecorder;
use nbandit::{BanditAgentConfig, Prng, Testbed};
use rand::SeedableRng;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};

fn new_prng(seed: Option<u64>) -> Prng {
    match seed {
        None => Prng::from_entropy(),
        Some(s) => Prng::seed_from_u64(s),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Options::parse();
    opts.validate()?;
    let human = opts.output == OutputFormat::Human;

    let env_config = BanditConfig::from(&opts);
    let agent_configs = Vec::<BanditAgentConfig>::from(&opts);
    let testbed = Testbed::new((&opts).into(), env_config, agent_configs);
    if human && !opts.silent {
        println!("{:#?}", testbed);
    }

    let mut display = (human && !opts.silent).then(|| DisplayLogger::new(opts.display_interval));
    let mut recorder = opts.save_frames.as_ref().map(|_| FrameRecorder::new());

    let mut rng = new_prng(opts.seed);
    let curves = testbed.evaluate(&mut rng, &mut (&mut display, &mut recorder))?;

    match opts.output {
        OutputFormat::Human if opts.silent => print!("{}", curves),
        OutputFormat::Human => {}
        OutputFormat::Json => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer(&mut out, &curves)?;
            writeln!(out)?;
        }
    }

    if let (Some(path), Some(recorder)) = (&opts.save_frames, recorder) {
        let mut file = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut file, &recorder.into_frames())?;
        file.flush()?;
    }
    Ok(())
}
