use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use pagedesk_search::{search_pages, PageQuery};
use pagedesk_sidebar::{find_app, ActiveTarget, AppId, Page, PageId, Section, Seed, SidebarStore};

#[derive(Parser)]
#[command(
    name = "pagedesk-cli",
    about = "Utility commands for the PageDesk sidebar",
    author,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 顯示種子工作區的側邊欄樹。 / Print the seeded sidebar tree.
    Tree(TreeArgs),
    /// 以標題搜尋種子工作區的頁面。 / Search seeded pages by title.
    Search(SearchArgs),
    /// 執行操作腳本並顯示每一步的結果。 / Apply an operation script and print each transition.
    Script(ScriptArgs),
}

#[derive(Args)]
struct TreeArgs {
    /// 以 JSON 快照輸出完整狀態。 / Emit the full state as a JSON snapshot.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// 要比對的標題樣式。 / Title pattern to match.
    pattern: String,

    /// 將樣式視為正規表示式。 / Interpret the pattern as a regular expression.
    #[arg(long)]
    regex: bool,
}

#[derive(Args)]
struct ScriptArgs {
    /// 逐行操作腳本檔；`#` 開頭為註解。 / Line-oriented operation script; `#` starts a comment.
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Tree(args) => run_tree(args),
        Commands::Search(args) => run_search(args),
        Commands::Script(args) => run_script(args),
    }
}

fn seeded_store() -> SidebarStore {
    SidebarStore::new(Seed::default())
}

fn run_tree(args: TreeArgs) -> Result<()> {
    let store = seeded_store();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&store.snapshot())?);
    } else {
        print_sections(&store);
    }
    Ok(())
}

fn run_search(args: SearchArgs) -> Result<()> {
    let store = seeded_store();
    let query = if args.regex {
        PageQuery::regex(&args.pattern)?
    } else {
        PageQuery::plain(&args.pattern)
    };
    let hits = search_pages(store.private_pages(), store.teamspace_pages(), &query);
    if hits.is_empty() {
        println!("No matches found.");
        return Ok(());
    }
    println!("Search \"{}\" ({} hits)", args.pattern, hits.len());
    for hit in hits {
        let section = match hit.section {
            Section::Private => "private",
            Section::Teamspace => "teamspace",
        };
        println!(
            "  [{}] {} {} ({})",
            section, hit.page.icon, hit.page.title, hit.page.id
        );
    }
    Ok(())
}

fn run_script(args: ScriptArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read script '{}'", args.file.display()))?;
    let mut store = seeded_store();
    for (number, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        apply_line(&mut store, line).with_context(|| format!("line {}: {line}", number + 1))?;
    }
    println!("-- final state (revision {})", store.revision());
    print_sections(&store);
    print_trash(&store);
    Ok(())
}

fn apply_line(store: &mut SidebarStore, line: &str) -> Result<()> {
    let (command, rest) = split_word(line);
    match command {
        "add" => {
            let (section_word, title) = split_word(rest);
            let section = match section_word {
                "private" => Section::Private,
                "teamspace" => Section::Teamspace,
                other => bail!("unknown section '{other}' (expected private or teamspace)"),
            };
            let id = store.add_top_level(section, non_empty(title));
            let title = page_title(store, &id);
            println!("added {id} \"{title}\" to {section_word}");
        }
        "sub" => {
            let (parent_word, title) = split_word(rest);
            if parent_word.is_empty() {
                bail!("sub requires a parent page id");
            }
            let parent_id = PageId::from_string(parent_word);
            match store.add_sub_page(&parent_id, non_empty(title)) {
                Some(id) => {
                    let title = page_title(store, &id);
                    println!("added {id} \"{title}\" under {parent_id}");
                }
                None => println!("no page matches \"{parent_id}\"; nothing changed"),
            }
        }
        "delete" => {
            let id = PageId::from_string(required(rest, "delete requires a page id")?);
            match store.find_page(&id).map(|page| page.title.clone()) {
                Some(title) => {
                    store.delete_to_trash(&id);
                    println!("trashed {id} \"{title}\"");
                }
                None => println!("no page matches \"{id}\"; nothing changed"),
            }
        }
        "restore" => {
            let id = PageId::from_string(required(rest, "restore requires a page id")?);
            if store.trashed_pages().iter().any(|page| page.id == id) {
                store.restore(&id);
                println!("restored {id} to private");
            } else {
                println!("no trashed page matches \"{id}\"; nothing changed");
            }
        }
        "purge" => {
            let id = PageId::from_string(required(rest, "purge requires a page id")?);
            if store.trashed_pages().iter().any(|page| page.id == id) {
                store.purge(&id);
                println!("purged {id}");
            } else {
                println!("no trashed page matches \"{id}\"; nothing changed");
            }
        }
        "open" => {
            let target = required(rest, "open requires a page id, app id, or 'none'")?;
            if target == "none" {
                store.set_active(None);
                println!("active: none");
            } else if let Some(app) = find_app(&AppId::from_string(target)) {
                store.set_active(Some(ActiveTarget::App(app.id.clone())));
                println!("active: app {}", app.id);
            } else {
                let id = PageId::from_string(target);
                store.set_active(Some(ActiveTarget::Page(id.clone())));
                println!("active: {id}");
            }
        }
        "ls" => print_sections(store),
        "trash" => print_trash(store),
        other => bail!("unknown command '{other}'"),
    }
    Ok(())
}

fn print_sections(store: &SidebarStore) {
    println!("Private");
    for page in store.private_pages() {
        print_subtree(page, 1);
    }
    println!("Teamspaces");
    for page in store.teamspace_pages() {
        print_subtree(page, 1);
    }
}

fn print_subtree(page: &Page, depth: usize) {
    println!(
        "{}{} {} ({})",
        "  ".repeat(depth),
        page.icon,
        page.title,
        page.id
    );
    for child in &page.children {
        print_subtree(child, depth + 1);
    }
}

fn print_trash(store: &SidebarStore) {
    if store.trashed_pages().is_empty() {
        println!("Trash (empty)");
        return;
    }
    println!("Trash ({} pages)", store.trashed_pages().len());
    for page in store.trashed_pages() {
        println!("  {} {} ({})", page.icon, page.title, page.id);
    }
}

fn page_title(store: &SidebarStore, id: &PageId) -> String {
    store
        .find_page(id)
        .map(|page| page.title.clone())
        .unwrap_or_default()
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    }
}

fn non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn required<'a>(input: &'a str, message: &'static str) -> Result<&'a str> {
    match non_empty(input) {
        Some(value) => Ok(value),
        None => bail!(message),
    }
}
