use clap::{App, AppSettings, Arg, ArgMatches};
use clearcoin_lib::{
    signing_payload, BatchSelector, Ed25519Oracle, Keypair, Sha256, Transaction, TransactionInput,
    TransactionOutput, UtxoId, UtxoPool,
};
use std::error::Error;

struct DemoCliOptions {
    verbose: bool,
}

impl DemoCliOptions {
    pub fn parse(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            verbose: matches.is_present("verbose"),
        })
    }
}

fn demo_command() -> App<'static> {
    App::new("demo")
        .version("0.1")
        .about("Runs batch selection over a small hand-built ledger scenario.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log selection decisions."),
        )
}

fn sign_spend(
    spends: &[(UtxoId, &Keypair)],
    outputs: Vec<TransactionOutput>,
) -> Result<Transaction, Box<dyn Error>> {
    let spend_ids = spends.iter().map(|(id, _)| *id).collect::<Vec<UtxoId>>();
    let mut inputs = Vec::with_capacity(spends.len());
    for (slot, (utxo_id, keypair)) in spends.iter().enumerate() {
        let payload = signing_payload(slot as u32, &spend_ids, &outputs)?;
        inputs.push(TransactionInput::new(*utxo_id, keypair.sign(&payload)));
    }
    Ok(Transaction::new(inputs, outputs)?)
}

fn run_demo_command(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let options = DemoCliOptions::parse(matches)?;
    if options.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let alice = Keypair::from_seed([1; 32]);
    let bob = Keypair::from_seed([2; 32]);
    let carol = Keypair::from_seed([3; 32]);
    let dave = Keypair::from_seed([4; 32]);

    // Genesis: one UTXO worth 10 owned by Alice.
    let genesis = UtxoId::new(Sha256::digest(b"clearcoin demo genesis"), 0);
    let mut pool = UtxoPool::new();
    pool.add(genesis, TransactionOutput::new(10, alice.public_key()));

    // Two conflicting spends of the genesis UTXO plus a dependent spend.
    let to_bob = sign_spend(
        &[(genesis, &alice)],
        vec![TransactionOutput::new(7, bob.public_key())],
    )?;
    let to_carol = sign_spend(
        &[(genesis, &alice)],
        vec![TransactionOutput::new(2, carol.public_key())],
    )?;
    let bob_to_dave = sign_spend(
        &[(to_bob.output_utxo_id(0), &bob)],
        vec![TransactionOutput::new(7, dave.public_key())],
    )?;

    let batch = vec![to_bob, to_carol, bob_to_dave];
    println!("candidates:");
    for tx in &batch {
        println!("  {}", tx.id());
    }

    let selection = BatchSelector::new(&Ed25519Oracle).select(&batch, &pool);
    println!("accepted ({} fee units collected):", selection.total_fee);
    for tx in &selection.accepted {
        println!("  {}", tx.id());
    }
    println!("final pool:");
    for (utxo_id, output) in selection.pool.iter() {
        println!("  {} -> {}", utxo_id, output);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let matches = App::new("clearcoin")
        .about("Clearcoin ledger batch-selection tools.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(demo_command())
        .get_matches();

    if let Some(ref matches) = matches.subcommand_matches("demo") {
        run_demo_command(&matches)
    } else {
        panic!("Should report help.");
    }
}
