use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::grid::{SharedGrid, VoxelGrid};
use crate::mesh::{extract_surface_into, MeshingContext};

use super::types::{MeshRequest, MeshResult};

/// Асинхронный мешер с фоновым потоком
///
/// Одновременно в работе не больше одного запроса. Новый запрос
/// отправляется только если версия сетки изменилась.
pub struct MeshWorker {
    request_tx: Option<Sender<MeshRequest>>,
    result_rx: Receiver<MeshResult>,
    worker: Option<JoinHandle<()>>,
    pending: bool,
    last_sent_version: Option<u64>,
}

impl MeshWorker {
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<MeshRequest>();
        let (result_tx, result_rx) = channel::<MeshResult>();

        let worker = thread::spawn(move || {
            log::info!("mesh worker started");
            let mut ctx = MeshingContext::new();
            while let Ok(request) = request_rx.recv() {
                let stats = extract_surface_into(&request.grid, &mut ctx);
                let result = MeshResult {
                    version: request.version,
                    mesh: ctx.take_mesh(),
                    stats,
                };
                if result_tx.send(result).is_err() {
                    break;
                }
            }
            log::info!("mesh worker stopped");
        });

        Self {
            request_tx: Some(request_tx),
            result_rx,
            worker: Some(worker),
            pending: false,
            last_sent_version: None,
        }
    }

    /// Отправить снимок сетки, если он новее последнего отправленного
    ///
    /// Возвращает true, если запрос ушёл воркеру.
    pub fn submit(&mut self, grid: &SharedGrid) -> bool {
        self.submit_snapshot(grid.snapshot(), grid.version())
    }

    /// Отправить произвольный снимок с версией
    pub fn submit_snapshot(&mut self, grid: Arc<VoxelGrid>, version: u64) -> bool {
        if self.pending || self.last_sent_version == Some(version) {
            return false;
        }
        let Some(tx) = &self.request_tx else {
            return false;
        };
        if tx.send(MeshRequest { grid, version }).is_ok() {
            self.pending = true;
            self.last_sent_version = Some(version);
            true
        } else {
            log::warn!("mesh worker is gone, request dropped");
            false
        }
    }

    /// Забрать готовый меш без блокировки
    pub fn try_get_mesh(&mut self) -> Option<MeshResult> {
        match self.result_rx.try_recv() {
            Ok(result) => {
                self.pending = false;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = false;
                None
            }
        }
    }

    /// Дождаться текущего запроса; None если ничего не в работе
    pub fn wait_mesh(&mut self) -> Option<MeshResult> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        match self.result_rx.recv() {
            Ok(result) => Some(result),
            Err(_) => {
                log::warn!("mesh worker disconnected while a request was pending");
                None
            }
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for MeshWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshWorker {
    fn drop(&mut self) {
        // Закрываем канал запросов, чтобы цикл воркера завершился
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::warn!("mesh worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{sphere, translate};
    use crate::mesh::extract_surface;

    #[test]
    fn worker_matches_synchronous_extraction() {
        let mut shared = SharedGrid::with_dims(8, 8, 8).unwrap();
        shared.paint(translate(4.0, 4.0, 4.0, sphere(2.5)));

        let mut worker = MeshWorker::new();
        assert!(worker.submit(&shared));
        let result = worker.wait_mesh().unwrap();

        assert_eq!(result.version, 1);
        assert_eq!(result.mesh, extract_surface(shared.grid()));
        assert_eq!(result.stats.active_cells, result.mesh.vertex_count());
    }

    #[test]
    fn unchanged_version_is_not_resubmitted() {
        let shared = SharedGrid::with_dims(4, 4, 4).unwrap();
        let mut worker = MeshWorker::new();

        assert!(worker.submit(&shared));
        assert!(!worker.submit(&shared), "pending request blocks resubmit");
        worker.wait_mesh().unwrap();
        assert!(!worker.submit(&shared), "same version is skipped");
    }

    #[test]
    fn wait_without_request_is_none() {
        let mut worker = MeshWorker::new();
        assert!(worker.wait_mesh().is_none());
        assert!(worker.try_get_mesh().is_none());
    }
}
