//! Subcommand implementations.
//!
//! Each command loads what it needs from the [`Workspace`], prints a short
//! report to stdout, and propagates failures with context naming the
//! skill id or path involved.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use nanopeaces_adapters::{AgentType, SkillAdapter, adapter_for};
use nanopeaces_fingerprint::{Language, ProjectFingerprint, create_fingerprint};
use nanopeaces_skills::{RegistryEntry, SkillStore};
use tracing::info;

use crate::helpers::Settings;
use crate::plan::OutputPlan;
use crate::project::{
    ProjectConfig, VERSION, load_config, save_config, save_context, update_gitignore,
};

/// Everything a command runs against.
pub struct Workspace {
    pub project_root: PathBuf,
    pub store: SkillStore,
    pub settings: Settings,
}

impl Workspace {
    fn catalog(&self) -> Result<Vec<RegistryEntry>> {
        self.store.list_available_skills().with_context(|| {
            format!(
                "failed to load skill catalog from {}",
                self.store.root().display()
            )
        })
    }
}

// ---------------------------------------------------------------------------
// Subcommand: init
// ---------------------------------------------------------------------------

pub async fn cmd_init(
    ws: &Workspace,
    agent: Option<AgentType>,
    skills: Vec<String>,
    yes: bool,
) -> Result<()> {
    if !yes && load_config(&ws.project_root).await?.is_some() {
        bail!(
            "{} is already initialized; pass --yes to reinitialize",
            ws.project_root.display()
        );
    }

    let fingerprint = create_fingerprint(&ws.project_root);
    match describe_stack(&fingerprint) {
        Some(stack) => println!("Detected: {stack}"),
        None => println!("Could not detect project stack. Skills will still work."),
    }

    let agent = agent
        .or_else(|| ws.settings.default_agent())
        .unwrap_or(AgentType::Antigravity);
    println!("Agent: {agent}");

    let catalog = ws.catalog()?;
    if catalog.is_empty() {
        bail!("no skills available in {}", ws.store.root().display());
    }

    let selected = if skills.is_empty() {
        default_selection(&fingerprint, &catalog)
    } else {
        for id in &skills {
            ensure_in_catalog(id, &catalog)?;
        }
        dedup(skills)
    };
    println!("Skills: {}", selected.join(", "));

    let adapter = adapter_for(agent);
    let written = install_skills(ws, adapter.as_ref(), &selected).await?;
    println!(
        "Installed {} skill(s), {} file(s) written",
        selected.len(),
        written
    );

    save_config(&ws.project_root, &ProjectConfig::new(agent, selected)).await?;
    save_context(&ws.project_root, &fingerprint).await?;
    update_gitignore(&ws.project_root).await?;

    info!(agent = %agent, "project initialized");
    println!();
    println!("{}", adapter.install_instructions());
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: add
// ---------------------------------------------------------------------------

pub async fn cmd_add(
    ws: &Workspace,
    skill_id: Option<String>,
    all: bool,
    agent: Option<AgentType>,
) -> Result<()> {
    let config = load_config(&ws.project_root).await?;

    let Some(agent) = agent.or(config.as_ref().map(|c| c.agent)) else {
        bail!("no config found; run `nano-peaces init` first, or pass --agent");
    };

    let catalog = ws.catalog()?;
    let ids = if all {
        default_selection(&create_fingerprint(&ws.project_root), &catalog)
    } else if let Some(id) = skill_id {
        ensure_in_catalog(&id, &catalog)?;
        vec![id]
    } else {
        bail!("name a skill to add, or pass --all");
    };

    let adapter = adapter_for(agent);
    install_skills(ws, adapter.as_ref(), &ids).await?;
    println!("Added {} skill(s): {}", ids.len(), ids.join(", "));

    if let Some(mut config) = config {
        config.add_skills(&ids);
        save_config(&ws.project_root, &config).await?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: list
// ---------------------------------------------------------------------------

pub async fn cmd_list(ws: &Workspace) -> Result<()> {
    let catalog = ws.catalog()?;
    if catalog.is_empty() {
        println!("No skills available in {}.", ws.store.root().display());
        return Ok(());
    }

    let installed = load_config(&ws.project_root)
        .await?
        .map(|c| c.skills)
        .unwrap_or_default();

    println!("Available skills:");
    println!();
    for line in list_lines(&catalog, &installed) {
        println!("{line}");
    }
    println!();

    let installed_count = catalog
        .iter()
        .filter(|s| installed.contains(&s.id))
        .count();
    if installed_count > 0 {
        println!(
            "{installed_count} installed, {} available",
            catalog.len() - installed_count
        );
    }
    println!("Use `nano-peaces add <skill>` to install a skill.");
    Ok(())
}

fn list_lines(catalog: &[RegistryEntry], installed: &[String]) -> Vec<String> {
    catalog
        .iter()
        .map(|skill| {
            let is_installed = installed.contains(&skill.id);
            let status = if is_installed { '●' } else { '○' };
            let tag = if is_installed { " (installed)" } else { "" };
            let desc = skill
                .description
                .as_deref()
                .map(|d| format!("  {d}"))
                .unwrap_or_default();
            format!("  {status}  {}{tag}{desc}", skill.id)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Subcommand: update
// ---------------------------------------------------------------------------

pub async fn cmd_update(ws: &Workspace) -> Result<()> {
    let Some(mut config) = load_config(&ws.project_root).await? else {
        bail!("no config found; run `nano-peaces init` first");
    };

    let adapter = adapter_for(config.agent);
    let written = install_skills(ws, adapter.as_ref(), &config.skills).await?;

    let fingerprint = create_fingerprint(&ws.project_root);
    save_context(&ws.project_root, &fingerprint).await?;

    let previous = std::mem::replace(&mut config.version, VERSION.to_owned());
    save_config(&ws.project_root, &config).await?;

    info!(from = %previous, to = VERSION, skills = config.skills.len(), "skills updated");
    println!(
        "Updated {} skill(s) for {}, {} file(s) written",
        config.skills.len(),
        config.agent,
        written
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: info
// ---------------------------------------------------------------------------

pub fn cmd_info(ws: &Workspace, skill_id: &str) -> Result<()> {
    let catalog = ws.catalog()?;
    let entry = ensure_in_catalog(skill_id, &catalog)?;
    let source = ws
        .store
        .load_skill_source(skill_id)
        .with_context(|| format!("failed to load skill `{skill_id}`"))?;

    println!("{}", entry.id);
    if let Some(description) = &entry.description {
        println!("  {description}");
    }
    println!();
    println!("  path:      {}", entry.skill_path);
    println!("  priority:  {}", entry.priority);

    let signals = &entry.signals;
    for (label, values) in [
        ("dependencies", &signals.dependencies),
        ("files", &signals.file_patterns),
        ("keywords", &signals.keywords),
        ("intents", &signals.task_intent),
    ] {
        if !values.is_empty() {
            println!("  {label:<11}{}", values.join(", "));
        }
    }

    let document = source.document();
    if let Some(header) = &document.header {
        println!();
        println!("  header:");
        for (key, value) in &header.fields {
            println!("    {key}: {value}");
        }
    }

    println!();
    println!("  chunks ({}):", source.chunks.len());
    for key in source.chunks.keys() {
        println!("    {key}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Subcommand: detect
// ---------------------------------------------------------------------------

pub fn cmd_detect(ws: &Workspace, json: bool) -> Result<()> {
    let fingerprint = create_fingerprint(&ws.project_root);

    if json {
        let rendered =
            serde_json::to_string_pretty(&fingerprint).context("failed to render fingerprint")?;
        println!("{rendered}");
        return Ok(());
    }

    let join = |items: Vec<&str>| {
        if items.is_empty() {
            "none".to_owned()
        } else {
            items.join(", ")
        }
    };

    println!("framework:    {}", fingerprint.framework);
    println!(
        "ui:           {}",
        join(fingerprint.ui_libraries.iter().map(|l| l.as_str()).collect())
    );
    println!("styling:      {}", fingerprint.styling);
    println!("language:     {}", fingerprint.language);
    println!("router:       {}", fingerprint.router);
    println!(
        "state:        {}",
        join(fingerprint.state_management.iter().map(|l| l.as_str()).collect())
    );
    println!(
        "forms:        {}",
        fingerprint.form_library.map_or("none", |f| f.as_str())
    );
    println!(
        "recommended:  {}",
        join(fingerprint.recommended_skills.iter().map(String::as_str).collect())
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Load, transform, and write `ids` in order.
///
/// When a skill fails to load, outputs of the skills before it are still
/// written and the error names the failing skill. Returns the number of
/// files written.
async fn install_skills(ws: &Workspace, adapter: &dyn SkillAdapter, ids: &[String]) -> Result<usize> {
    let mut plan = OutputPlan::new();

    for id in ids {
        match ws.store.load_skill_source(id) {
            Ok(source) => plan.add(adapter.transform(&source)),
            Err(e) => {
                let written = plan.write(&ws.project_root).await?;
                tracing::warn!(skill = %id, kept = written.len(), "install aborted");
                return Err(e).with_context(|| format!("failed to install skill `{id}`"));
            }
        }
    }

    let written = plan.write(&ws.project_root).await?;
    info!(
        agent = %adapter.agent(),
        skills = ids.len(),
        files = written.len(),
        "skills installed"
    );
    Ok(written.len())
}

/// Recommended skills present in the catalog, or the whole catalog when
/// nothing is recommended.
fn default_selection(fingerprint: &ProjectFingerprint, catalog: &[RegistryEntry]) -> Vec<String> {
    if fingerprint.recommended_skills.is_empty() {
        return catalog.iter().map(|s| s.id.clone()).collect();
    }
    fingerprint
        .recommended_skills
        .iter()
        .filter(|id| catalog.iter().any(|s| &s.id == *id))
        .cloned()
        .collect()
}

fn ensure_in_catalog<'a>(id: &str, catalog: &'a [RegistryEntry]) -> Result<&'a RegistryEntry> {
    match catalog.iter().find(|s| s.id == id) {
        Some(entry) => Ok(entry),
        None => {
            let available: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
            bail!(
                "skill `{id}` not found (available: {})",
                available.join(", ")
            )
        }
    }
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

/// One-line stack summary, `None` when nothing was detected.
fn describe_stack(fingerprint: &ProjectFingerprint) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    if fingerprint.framework != Default::default() {
        parts.push(fingerprint.framework.as_str());
    }
    if fingerprint.language == Language::Typescript {
        parts.push("TypeScript");
    }
    if fingerprint.styling != Default::default() {
        parts.push(fingerprint.styling.as_str());
    }
    parts.extend(fingerprint.ui_libraries.iter().map(|l| l.as_str()));

    (!parts.is_empty()).then(|| parts.join(" + "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::Path;

    use nanopeaces_fingerprint::{Framework, Styling, UiLibrary};
    use nanopeaces_skills::SkillRegistry;

    use super::*;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    /// A content store with two skills and a project depending on both
    /// component libraries.
    fn fixture() -> (tempfile::TempDir, Workspace) {
        let tmp = tempfile::tempdir().unwrap();
        let skills = tmp.path().join("skills");
        write(
            &skills,
            "registry.json",
            r#"{
              "version": "0.1.0",
              "skills": [
                {"id": "shadcn-ui", "description": "shadcn/ui", "skillPath": "shadcn-ui/SKILL.md", "priority": 1},
                {"id": "carbon-design", "skillPath": "carbon-design/SKILL.md", "priority": 2},
                {"id": "broken", "skillPath": "broken/SKILL.md"}
              ]
            }"#,
        );
        write(&skills, "shadcn-ui/SKILL.md", "---\nname: shadcn-ui\n---\n\n# shadcn");
        write(&skills, "shadcn-ui/chunks/button.md", "# Button");
        write(&skills, "carbon-design/SKILL.md", "# Carbon");

        let project = tmp.path().join("app");
        write(
            &project,
            "package.json",
            r#"{"dependencies": {"radix-ui": "1", "tailwindcss": "4", "@carbon/react": "1"}}"#,
        );

        let ws = Workspace {
            project_root: project,
            store: SkillStore::new(skills),
            settings: Settings::default(),
        };
        (tmp, ws)
    }

    fn read(ws: &Workspace, rel: &str) -> String {
        std::fs::read_to_string(ws.project_root.join(rel)).unwrap()
    }

    #[tokio::test]
    async fn init_installs_recommendations_and_saves_state() {
        let (_tmp, ws) = fixture();
        cmd_init(&ws, Some(AgentType::Generic), vec![], false)
            .await
            .unwrap();

        let registry = SkillRegistry::from_json(&read(&ws, ".ai/skills/registry.json")).unwrap();
        let ids: Vec<_> = registry.skills.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["shadcn-ui", "carbon-design"]);
        assert_eq!(read(&ws, ".ai/skills/shadcn-ui/chunks/button.md"), "# Button");

        let config = load_config(&ws.project_root).await.unwrap().unwrap();
        assert_eq!(config.agent, AgentType::Generic);
        assert_eq!(config.skills, ["shadcn-ui", "carbon-design"]);

        let context: ProjectFingerprint =
            serde_json::from_str(&read(&ws, ".nano-peaces/context.json")).unwrap();
        assert!(context.recommended_skills.contains(&"ui-selector".to_owned()));
        assert!(read(&ws, ".gitignore").contains(".nano-peaces"));
    }

    #[tokio::test]
    async fn init_refuses_to_reinitialize_without_yes() {
        let (_tmp, ws) = fixture();
        cmd_init(&ws, None, vec!["carbon-design".into()], false)
            .await
            .unwrap();
        assert!(cmd_init(&ws, None, vec![], false).await.is_err());
        cmd_init(&ws, None, vec!["carbon-design".into()], true)
            .await
            .unwrap();
        assert!(ws.project_root.join(".agent/skills/carbon-design/SKILL.md").is_file());
    }

    #[tokio::test]
    async fn init_uses_settings_agent() {
        let (_tmp, mut ws) = fixture();
        ws.settings.default_agent = Some("cursor".into());
        cmd_init(&ws, None, vec!["shadcn-ui".into(), "shadcn-ui".into()], false)
            .await
            .unwrap();
        assert!(read(&ws, ".cursor/rules/shadcn-ui.mdc").contains("# Button"));
        let config = load_config(&ws.project_root).await.unwrap().unwrap();
        assert_eq!(config.skills, ["shadcn-ui"]);
    }

    #[tokio::test]
    async fn init_rejects_unknown_skill() {
        let (_tmp, ws) = fixture();
        let err = cmd_init(&ws, None, vec!["nope".into()], false)
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("`nope`"));
        assert!(message.contains("shadcn-ui, carbon-design, broken"));
    }

    #[tokio::test]
    async fn claude_code_batch_concatenates() {
        let (_tmp, ws) = fixture();
        cmd_init(&ws, Some(AgentType::ClaudeCode), vec![], false)
            .await
            .unwrap();
        let claude = read(&ws, "CLAUDE.md");
        let shadcn = claude.find("## UI Skills: shadcn-ui").unwrap();
        let carbon = claude.find("## UI Skills: carbon-design").unwrap();
        assert!(shadcn < carbon);
        assert!(!claude.contains("name: shadcn-ui"));
    }

    #[tokio::test]
    async fn add_requires_agent_or_config() {
        let (_tmp, ws) = fixture();
        assert!(cmd_add(&ws, Some("carbon-design".into()), false, None).await.is_err());

        cmd_add(&ws, Some("carbon-design".into()), false, Some(AgentType::Antigravity))
            .await
            .unwrap();
        assert!(ws.project_root.join(".agent/skills/carbon-design/SKILL.md").is_file());
        assert!(load_config(&ws.project_root).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_extends_saved_config_and_catalog() {
        let (_tmp, ws) = fixture();
        cmd_init(&ws, Some(AgentType::Generic), vec!["shadcn-ui".into()], false)
            .await
            .unwrap();
        cmd_add(&ws, Some("carbon-design".into()), false, None).await.unwrap();
        cmd_add(&ws, Some("shadcn-ui".into()), false, None).await.unwrap();

        let config = load_config(&ws.project_root).await.unwrap().unwrap();
        assert_eq!(config.skills, ["shadcn-ui", "carbon-design"]);

        let registry = SkillRegistry::from_json(&read(&ws, ".ai/skills/registry.json")).unwrap();
        assert_eq!(registry.skills.len(), 2);
    }

    #[tokio::test]
    async fn add_without_target_is_an_error() {
        let (_tmp, ws) = fixture();
        assert!(cmd_add(&ws, None, false, Some(AgentType::Generic)).await.is_err());
    }

    #[tokio::test]
    async fn failed_skill_keeps_earlier_outputs() {
        let (_tmp, ws) = fixture();
        let err = cmd_init(
            &ws,
            Some(AgentType::Generic),
            vec!["carbon-design".into(), "broken".into(), "shadcn-ui".into()],
            false,
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("`broken`"));
        assert!(ws.project_root.join(".ai/skills/carbon-design/SKILL.md").is_file());
        assert!(!ws.project_root.join(".ai/skills/shadcn-ui").exists());
        assert!(load_config(&ws.project_root).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_reinstalls_and_bumps_version() {
        let (_tmp, ws) = fixture();
        let mut config = ProjectConfig::new(AgentType::Generic, vec!["carbon-design".into()]);
        config.version = "0.0.1".into();
        save_config(&ws.project_root, &config).await.unwrap();

        cmd_update(&ws).await.unwrap();

        let saved = load_config(&ws.project_root).await.unwrap().unwrap();
        assert_eq!(saved.version, VERSION);
        assert!(ws.project_root.join(".ai/skills/carbon-design/SKILL.md").is_file());
        assert!(ws.project_root.join(".nano-peaces/context.json").is_file());
    }

    #[tokio::test]
    async fn update_without_config_is_an_error() {
        let (_tmp, ws) = fixture();
        assert!(cmd_update(&ws).await.is_err());
    }

    #[tokio::test]
    async fn info_and_list_run_against_the_catalog() {
        let (_tmp, ws) = fixture();
        cmd_info(&ws, "shadcn-ui").unwrap();
        assert!(cmd_info(&ws, "missing").is_err());
        assert!(cmd_info(&ws, "broken").is_err());
        cmd_list(&ws).await.unwrap();
        cmd_detect(&ws, true).unwrap();
        cmd_detect(&ws, false).unwrap();
    }

    #[test]
    fn list_marks_installed_skills() {
        let catalog: Vec<RegistryEntry> = serde_json::from_str(
            r#"[{"id": "a", "description": "Alpha", "skillPath": "a/SKILL.md"},
                {"id": "b", "skillPath": "b/SKILL.md"}]"#,
        )
        .unwrap();
        let lines = list_lines(&catalog, &["b".to_owned()]);
        assert_eq!(lines, ["  ○  a  Alpha", "  ●  b (installed)"]);
    }

    #[test]
    fn default_selection_filters_recommendations() {
        let catalog: Vec<RegistryEntry> = serde_json::from_str(
            r#"[{"id": "shadcn-ui", "skillPath": "s"}, {"id": "other", "skillPath": "o"}]"#,
        )
        .unwrap();

        let mut fingerprint = ProjectFingerprint::default();
        assert_eq!(default_selection(&fingerprint, &catalog), ["shadcn-ui", "other"]);

        fingerprint.recommended_skills = vec!["ui-selector".into(), "shadcn-ui".into()];
        assert_eq!(default_selection(&fingerprint, &catalog), ["shadcn-ui"]);
    }

    #[test]
    fn stack_description() {
        assert_eq!(describe_stack(&ProjectFingerprint::default()), None);

        let fingerprint = ProjectFingerprint {
            framework: Framework::Nextjs,
            language: Language::Typescript,
            styling: Styling::Tailwind,
            ui_libraries: vec![UiLibrary::Shadcn],
            ..ProjectFingerprint::default()
        };
        assert_eq!(
            describe_stack(&fingerprint).as_deref(),
            Some("nextjs + TypeScript + tailwind + shadcn")
        );
    }
}
