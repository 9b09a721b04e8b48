use client::YapperApi;
use entity::prelude::PostId;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{error, info};
use view::{ComposerSignal, EditorSignal, Page, Route, Shell};

use crate::command::{Command, HELP};

/// What the driver does after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render(Option<String>),
    Quit,
}

/// Reads commands from stdin until `quit` or end of input, rendering the
/// shell after each one.
pub async fn run<A: YapperApi>(shell: &mut Shell<A>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let notice = navigate(shell, Route::Home).await;
    render(&mut stdout, shell, notice).await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let notice = match line.parse::<Command>() {
            Ok(command) => match dispatch(shell, command).await {
                Outcome::Render(notice) => notice,
                Outcome::Quit => break,
            },
            Err(e) => Some(e.to_string()),
        };
        render(&mut stdout, shell, notice).await?;
    }

    info!(task = "quit");
    Ok(())
}

async fn render<W, A>(
    out: &mut W,
    shell: &Shell<A>,
    notice: Option<String>,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut text = format!("\n{}\n", shell);
    if let Some(notice) = notice {
        text.push_str(&format!("* {}\n", notice));
    }

    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

pub async fn dispatch<A: YapperApi>(
    shell: &mut Shell<A>,
    command: Command,
) -> Outcome {
    let notice = match command {
        Command::Navigate(route) => navigate(shell, route).await,
        Command::Refresh => match shell.reload().await {
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        },
        Command::Open => match shell.page_mut() {
            Page::Home(home) => {
                if home.open_composer() {
                    None
                } else {
                    Some("log in to post".to_string())
                }
            }
            _ => Some("the composer opens from home".to_string()),
        },
        Command::Cancel => match shell.page_mut() {
            Page::Home(home) => {
                if home.composer().is_some() {
                    home.close_composer();
                    None
                } else {
                    Some("nothing to cancel".to_string())
                }
            }
            _ => Some("nothing to cancel".to_string()),
        },
        Command::Write(text) => {
            let composer = match shell.page_mut() {
                Page::Home(home) => home.composer_mut(),
                Page::Create(composer) => Some(composer),
                Page::Profile(_) => None,
            };
            match composer {
                Some(composer) => {
                    if composer.set_content(text) {
                        None
                    } else {
                        Some("still posting".to_string())
                    }
                }
                None => Some("no composer is open".to_string()),
            }
        }
        Command::Submit => submit(shell).await,
        Command::Edit(id) => match shell.page_mut() {
            Page::Profile(profile) => {
                if profile.select(id) {
                    None
                } else {
                    Some(format!("post {} is not in your list", id))
                }
            }
            _ => Some("posts are edited from profile".to_string()),
        },
        Command::Buffer(text) => match shell.page_mut() {
            Page::Profile(profile) => {
                if profile.editor().is_visible() {
                    profile.editor_mut().set_buffer(text);
                    None
                } else {
                    Some("no post is being edited".to_string())
                }
            }
            _ => Some("no post is being edited".to_string()),
        },
        Command::Save | Command::Delete => edit(shell, command).await,
        Command::Modal(event) => match shell.page_mut() {
            Page::Profile(profile) => {
                profile.handle(event);
                None
            }
            _ => None,
        },
        Command::Show(id) => show(shell, id).await,
        Command::Help => Some(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
    };

    Outcome::Render(notice)
}

async fn navigate<A: YapperApi>(
    shell: &mut Shell<A>,
    route: Route,
) -> Option<String> {
    match shell.navigate(route).await {
        Ok(Some(url)) => Some(format!("open {} in your browser", url)),
        Ok(None) => None,
        Err(e) => {
            error!(task = "navigate", route = %route, err = e.to_string());
            Some(e.to_string())
        }
    }
}

async fn submit<A: YapperApi>(shell: &mut Shell<A>) -> Option<String> {
    let (api, page) = shell.parts();
    let signal = match page {
        Page::Home(home) => {
            if home.composer().is_none() {
                return Some("no composer is open".to_string());
            }
            home.submit(api).await
        }
        Page::Create(composer) => composer.submit(api).await,
        Page::Profile(_) => return Some("no composer is open".to_string()),
    };

    match signal {
        Some(ComposerSignal::Created(post)) => {
            Some(format!("posted #{}", post.id))
        }
        Some(ComposerSignal::Close) | None => None,
    }
}

async fn edit<A: YapperApi>(
    shell: &mut Shell<A>,
    command: Command,
) -> Option<String> {
    let (api, page) = shell.parts();
    let Page::Profile(profile) = page else {
        return Some("posts are edited from profile".to_string());
    };
    if !profile.editor().is_visible() {
        return Some("no post is being edited".to_string());
    }

    let signal = if command == Command::Save {
        profile.save(api).await
    } else {
        profile.delete(api).await
    };

    match signal {
        Some(EditorSignal::PostUpdated(post)) => {
            Some(format!("updated #{}", post.id))
        }
        Some(EditorSignal::PostDeleted(id)) => Some(format!("deleted #{}", id)),
        Some(EditorSignal::Closed) => None,
        None => Some("the post was not changed".to_string()),
    }
}

async fn show<A: YapperApi>(shell: &Shell<A>, id: PostId) -> Option<String> {
    match shell.api().get_post(id).await {
        Ok(post) => {
            let mut text =
                format!("#{} {}\n  {}", post.id, post.content, post.author());
            if let Some(label) = post.created_label() {
                text.push_str(&format!(" - {}", label));
            }
            Some(text)
        }
        Err(e) => {
            error!(task = "show post", id = %id, err = e.to_string());
            Some(e.to_string())
        }
    }
}
