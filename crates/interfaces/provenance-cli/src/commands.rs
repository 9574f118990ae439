use crate::{ListArgs, OutputFormat};
use anyhow::{bail, Context, Result};
use provenance_app_core::{
    Access, ArchiveContext, ArtworkList, AuthPort, CatalogPort, DetailView, ListCommand,
    ListSource, ListViewKernel, MemoryLocation, PersonList,
};
use provenance_core::{
    visible_mediums, Artwork, CategoryOptions, Credentials, Identity, PersonDetail, RecordId,
};
use serde::Serialize;

/// One rendered list: where the view ended up and what it shows.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutput<T> {
    pub location: String,
    pub items: Vec<T>,
}

fn emit<T: Serialize>(format: OutputFormat, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

/// Bootstrap the session, then sign in when credentials were given.
pub async fn open_session<G>(ctx: &ArchiveContext<G>, credentials: Option<Credentials>) -> Result<()>
where
    G: AuthPort + CatalogPort,
{
    ctx.session().bootstrap().await;
    if let Some(creds) = credentials {
        ctx.session()
            .sign_in(&creds)
            .await
            .with_context(|| format!("Sign-in failed for {}", creds.username))?;
    }
    Ok(())
}

pub fn require_session<G>(ctx: &ArchiveContext<G>, requested: &str) -> Result<Identity>
where
    G: AuthPort + CatalogPort,
{
    match ctx.session().guard(requested) {
        Access::Granted(identity) => Ok(identity),
        Access::RedirectToSignIn { return_to } => {
            bail!("{return_to} requires a signed-in session; pass --username and --password")
        }
        Access::Pending => bail!("Session is still initializing"),
    }
}

pub fn cmd_whoami<G>(ctx: &ArchiveContext<G>, format: OutputFormat) -> Result<Option<Identity>>
where
    G: AuthPort + CatalogPort,
{
    let identity = ctx
        .session()
        .store()
        .state()
        .identity
        .filter(|i| i.is_authenticated);

    emit(format, &identity, |identity| match identity {
        Some(i) => {
            println!(":: Signed in as {}", i.handle);
            if !i.email_address.is_empty() {
                println!("   Email: {}", i.email_address);
            }
            if i.is_privileged {
                println!("   Staff account");
            }
        }
        None => println!(":: Not signed in"),
    })?;
    Ok(identity)
}

async fn run_list<S: ListSource>(
    kernel: &mut ListViewKernel<S, MemoryLocation>,
    args: &ListArgs,
) -> Result<ListOutput<S::Item>> {
    kernel.dispatch(ListCommand::Mount);
    kernel.settle().await;

    for &(key, id) in &args.select {
        kernel.dispatch(ListCommand::Select(key, Some(id)));
        kernel.settle().await;
    }
    if let Some(term) = &args.search {
        kernel.dispatch(ListCommand::SetFreeText(term.clone()));
    }

    let state = kernel.state();
    if let Some(err) = &state.error {
        bail!("Failed to load results: {err}");
    }
    Ok(ListOutput {
        location: kernel.location().href(),
        items: state.visible_results().into_iter().cloned().collect(),
    })
}

pub async fn cmd_artworks<G>(
    ctx: &ArchiveContext<G>,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<ListOutput<Artwork>>
where
    G: AuthPort + CatalogPort,
{
    let location = MemoryLocation::new("/artworks", &args.query);
    require_session(ctx, &location.href())?;

    let mut kernel = ctx.artwork_list(location);
    let out = run_list(&mut kernel, args).await?;

    emit(format, &out, |out| {
        println!(":: {}", out.location);
        println!("   {} artwork(s)", out.items.len());
        for art in &out.items {
            println!(
                "{:>6}  {}  [{}] {} event(s)",
                art.id, art.name, art.medium, art.event_count
            );
        }
    })?;
    Ok(out)
}

pub async fn cmd_persons<G>(
    ctx: &ArchiveContext<G>,
    args: &ListArgs,
    format: OutputFormat,
) -> Result<ListOutput<provenance_core::Person>>
where
    G: AuthPort + CatalogPort,
{
    let location = MemoryLocation::new("/persons", &args.query);
    require_session(ctx, &location.href())?;

    let mut kernel = ctx.person_list(location);
    let out = run_list(&mut kernel, args).await?;

    emit(format, &out, |out| {
        println!(":: {}", out.location);
        println!("   {} person(s)", out.items.len());
        for person in &out.items {
            println!("{:>6}  {}  ({})", person.id, person.sort_label(), person.life_span());
        }
    })?;
    Ok(out)
}

pub async fn cmd_artwork<G>(ctx: &ArchiveContext<G>, id: RecordId, format: OutputFormat) -> Result<Artwork>
where
    G: AuthPort + CatalogPort,
{
    require_session(ctx, &format!("/artworks/{id}"))?;

    let art = match ctx.artwork_detail(id).await {
        DetailView::Loaded(art) => art,
        DetailView::NotFound => bail!("Artwork {id} not found"),
        DetailView::Failed(msg) => bail!("Failed to load artwork {id}: {msg}"),
    };

    emit(format, &art, |art| {
        println!(":: {} (#{})", art.name, art.id);
        println!("   Medium:    {}", art.medium);
        if let Some(art_type) = &art.art_type {
            println!("   Type:      {art_type}");
        }
        if !art.dimension.is_empty() {
            println!("   Dimension: {}", art.dimension);
        }
        if let Some(date) = &art.creation_date {
            println!("   Created:   {date}");
        }
        println!("\n:: Provenance");
        if art.provenance.is_empty() {
            println!("   No recorded events.");
        }
        for ev in &art.provenance {
            let who = ev
                .actor
                .as_deref()
                .or(ev.person.as_deref())
                .or(ev.institution.as_deref())
                .unwrap_or("unknown");
            println!(
                "   {:>3}. {:<12} {:<12} {}",
                ev.sequence,
                ev.event_type,
                ev.date.as_deref().unwrap_or("undated"),
                who
            );
        }
    })?;
    Ok(art)
}

pub async fn cmd_person<G>(
    ctx: &ArchiveContext<G>,
    id: RecordId,
    format: OutputFormat,
) -> Result<PersonDetail>
where
    G: AuthPort + CatalogPort,
{
    require_session(ctx, &format!("/persons/{id}"))?;

    let detail = match ctx.person_detail(id).await {
        DetailView::Loaded(detail) => detail,
        DetailView::NotFound => bail!("Person {id} not found"),
        DetailView::Failed(msg) => bail!("Failed to load person {id}: {msg}"),
    };

    emit(format, &detail, |detail| {
        println!(":: {} (#{})", detail.person.sort_label(), detail.person.id);
        println!("   Life: {}", detail.person.life_span());
        if !detail.biography.is_empty() {
            println!("\n{}", detail.biography);
        }
        println!("\n:: Events");
        for ev in &detail.events {
            println!(
                "   {:<12} {:<12} {}",
                ev.event_type,
                ev.date.as_deref().unwrap_or("undated"),
                ev.artwork_name
            );
        }
    })?;
    Ok(detail)
}

/// Every option list, mediums grouped under their art type.
pub async fn cmd_options<G>(ctx: &ArchiveContext<G>, format: OutputFormat) -> Result<CategoryOptions>
where
    G: AuthPort + CatalogPort,
{
    require_session(ctx, "/artworks")?;

    let artworks = ArtworkList::new(ctx.gateway().clone());
    let persons = PersonList::new(ctx.gateway().clone());
    let (art, people) = tokio::join!(artworks.fetch_options(), persons.fetch_options());
    let options = CategoryOptions {
        event_types: people.event_types,
        ..art
    };

    emit(format, &options, |options| {
        println!(":: Art types");
        for art_type in &options.art_types {
            println!("{:>6}  {}", art_type.id, art_type.display_name);
            for medium in visible_mediums(Some(art_type.id), &options.mediums) {
                println!("{:>10}  {}", medium.id, medium.display_name);
            }
        }
        println!("\n:: Event types");
        for ev in &options.event_types {
            println!("{:>6}  {}", ev.id, ev.display_name);
        }
    })?;
    Ok(options)
}
