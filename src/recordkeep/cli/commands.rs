use super::print::{print_record, print_records, print_success, print_warning};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use recordkeep::config::RecordkeepConfig;
use recordkeep::error::{RecordkeepError, Result};
use recordkeep::model::{join_marks, EditableRecord, Record, RecordDraft, RecordId, RecordType};
use recordkeep::store::fs_backend::FsBackend;
use recordkeep::store::RecordStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "RECORDKEEP_DATA";
const LOG_ENV: &str = "RECORDKEEP_LOG";

struct AppContext {
    store: RecordStore<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { mark }) => handle_list(&ctx, mark),
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            record_type,
            login,
            password,
            marks,
            id,
        }) => handle_add(&mut ctx, id, record_type, login, password, marks),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Update {
            id,
            record_type,
            login,
            password,
            marks,
        }) => handle_update(&mut ctx, id, record_type, login, password, marks),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Marks { id }) => handle_marks(&ctx, id),
        None => handle_list(&ctx, None),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    let config = RecordkeepConfig::load(&data_dir)?;

    let mut store = RecordStore::from_config(FsBackend::new(data_dir), &config);
    store.load()?;
    Ok(AppContext { store })
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recordkeep", "recordkeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecordkeepError::Api("Could not determine data directory".into()))
}

fn handle_list(ctx: &AppContext, mark: Option<String>) -> Result<()> {
    let records: Vec<&EditableRecord> = ctx
        .store
        .records()
        .iter()
        .filter(|r| match &mark {
            Some(wanted) => r.record.marks.iter().any(|m| &m.text == wanted),
            None => true,
        })
        .collect();
    print_records(&records);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: RecordId) -> Result<()> {
    let record = find(ctx, &id)?;
    print_record(record);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    id: Option<RecordId>,
    record_type: RecordType,
    login: String,
    password: String,
    marks: Option<String>,
) -> Result<()> {
    let id = match id {
        Some(id) => {
            let record = Record::new(id.clone(), record_type, login, password);
            ctx.store.add(EditableRecord::new(record, marks))?;
            ctx.store.save()?;
            id
        }
        None => {
            let id = ctx.store.add_empty()?;
            ctx.store.update(RecordDraft {
                id: id.clone(),
                record_type,
                login,
                password,
                raw_mark: marks,
            })?;
            id
        }
    };
    print_success(&format!("Record added: {}", id));
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let id = ctx.store.add_empty()?;
    ctx.store.save()?;
    println!("{}", id);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: RecordId,
    record_type: Option<RecordType>,
    login: Option<String>,
    password: Option<String>,
    marks: Option<String>,
) -> Result<()> {
    let Some(existing) = ctx.store.get(&id) else {
        ctx.store.update(RecordDraft {
            id: id.clone(),
            record_type: record_type.unwrap_or_default(),
            login: login.unwrap_or_default(),
            password: password.unwrap_or_default(),
            raw_mark: marks,
        })?;
        print_warning(&format!("No record with id {}", id));
        return Ok(());
    };

    let mut draft = RecordDraft::from_editable(existing);
    if let Some(record_type) = record_type {
        draft.record_type = record_type;
    }
    if let Some(login) = login {
        draft.login = login;
    }
    if let Some(password) = password {
        draft.password = password;
    }
    if marks.is_some() {
        draft.raw_mark = marks;
    }

    ctx.store.update(draft)?;
    print_success(&format!("Record updated: {}", id));
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: RecordId) -> Result<()> {
    let existed = ctx.store.get(&id).is_some();
    ctx.store.remove(&id)?;
    if existed {
        print_success(&format!("Record removed: {}", id));
    } else {
        print_warning(&format!("No record with id {}", id));
    }
    Ok(())
}

fn handle_marks(ctx: &AppContext, id: RecordId) -> Result<()> {
    let record = find(ctx, &id)?;
    let raw = record
        .raw_mark
        .clone()
        .unwrap_or_else(|| join_marks(&record.record.marks));
    println!("{}", raw);
    Ok(())
}

fn find<'a>(ctx: &'a AppContext, id: &RecordId) -> Result<&'a EditableRecord> {
    ctx.store
        .get(id)
        .ok_or_else(|| RecordkeepError::Api(format!("No record with id {}", id)))
}
