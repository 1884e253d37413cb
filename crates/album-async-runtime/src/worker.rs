//! Async worker task that processes album commands and sends updates.

use tokio::sync::mpsc;

use crate::service::AlbumService;
use crate::{AlbumCommand, AlbumUpdate};
use album_impose::PageId;

/// Receive commands until the channel closes, applying each to the service
/// and reporting the outcome on the update channel.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<AlbumCommand>,
    update_tx: mpsc::UnboundedSender<AlbumUpdate>,
    mut service: AlbumService,
) {
    while let Some(cmd) = command_rx.recv().await {
        process_command(cmd, &mut service, &update_tx).await;
    }
}

async fn process_command(
    cmd: AlbumCommand,
    service: &mut AlbumService,
    update_tx: &mpsc::UnboundedSender<AlbumUpdate>,
) {
    let update = match cmd {
        AlbumCommand::LoadAlbum => match service.load_album().await {
            Ok(page_count) => AlbumUpdate::AlbumLoaded { page_count },
            Err(e) => error_update(e),
        },

        AlbumCommand::AddFromGallery { filename } => {
            match service.add_from_gallery(&filename).await {
                Ok(id) => AlbumUpdate::PageAdded {
                    id: id.to_string(),
                    page_count: service.album().len(),
                },
                Err(e) => error_update(e),
            }
        }

        AlbumCommand::AddAllFromGallery { filenames } => {
            let requested = filenames.len();
            match service.add_all_from_gallery(&filenames).await {
                Ok(added) => AlbumUpdate::GalleryAdded { added, requested },
                Err(e) => error_update(e),
            }
        }

        AlbumCommand::DeletePage { id } => match service.delete_page(&PageId::from(id.as_str())) {
            Ok(_) => AlbumUpdate::PageDeleted {
                id,
                page_count: service.album().len(),
            },
            Err(e) => error_update(e),
        },

        AlbumCommand::RotatePage { id } => {
            match service.rotate_page(&PageId::from(id.as_str())).await {
                Ok(rotation_steps) => AlbumUpdate::PageRotated { id, rotation_steps },
                Err(e) => error_update(e),
            }
        }

        AlbumCommand::SetCaption { id, caption } => {
            match service.set_caption(&PageId::from(id.as_str()), caption) {
                Ok(()) => AlbumUpdate::CaptionUpdated { id },
                Err(e) => error_update(e),
            }
        }

        AlbumCommand::Reorder { ids } => {
            let ids: Vec<PageId> = ids.iter().map(|id| PageId::from(id.as_str())).collect();
            match service.reorder(&ids) {
                Ok(()) => AlbumUpdate::AlbumReordered {
                    page_count: service.album().len(),
                },
                Err(e) => error_update(e),
            }
        }

        AlbumCommand::SaveAlbum => match service.save_album().await {
            Ok(page_count) => AlbumUpdate::AlbumSaved { page_count },
            Err(e) => error_update(e),
        },

        AlbumCommand::BuildPrintLayout => match service.build_print_layout() {
            Ok(layout) => AlbumUpdate::LayoutBuilt {
                total_sheets: layout.total_sheets(),
            },
            Err(e) => error_update(e),
        },

        AlbumCommand::TeardownPrintLayout => {
            service.teardown_print_layout();
            AlbumUpdate::LayoutTornDown
        }

        AlbumCommand::PrintToFile { output_path } => {
            match service.print_to_file(&output_path).await {
                Ok(stats) => AlbumUpdate::PrintComplete {
                    path: output_path,
                    total_sheets: stats.total_sheets,
                },
                Err(e) => error_update(e),
            }
        }
    };

    let _ = update_tx.send(update);
}

fn error_update(e: impl std::fmt::Display) -> AlbumUpdate {
    AlbumUpdate::Error {
        message: e.to_string(),
    }
}
