use std::sync::Arc;

use anyhow::Context;
use provenance_core::{Artwork, PersonDetail, RecordId};
use provenance_infra::ArchiveClient;

use crate::detail::DetailView;
use crate::list_view::{ArtworkList, ListViewKernel, PersonList};
use crate::location::LocationPort;
use crate::ports::{AuthPort, CatalogPort};
use crate::session::SessionService;

/// Everything a view needs to talk to the archive, built once per process
/// and handed to each consumer.
pub struct ArchiveContext<G> {
    gateway: Arc<G>,
    session: SessionService<G>,
}

impl ArchiveContext<ArchiveClient> {
    pub fn connect(base_url: &str) -> anyhow::Result<Self> {
        let client = ArchiveClient::new(base_url)
            .with_context(|| format!("Failed to set up archive client for {base_url}"))?;
        Ok(Self::new(client))
    }
}

impl<G> ArchiveContext<G>
where
    G: AuthPort + CatalogPort,
{
    pub fn new(gateway: G) -> Self {
        let gateway = Arc::new(gateway);
        Self {
            session: SessionService::new(gateway.clone()),
            gateway,
        }
    }

    pub fn session(&self) -> &SessionService<G> {
        &self.session
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub fn artwork_list<L: LocationPort>(&self, location: L) -> ListViewKernel<ArtworkList<G>, L> {
        ListViewKernel::new(ArtworkList::new(self.gateway.clone()), location)
    }

    pub fn person_list<L: LocationPort>(&self, location: L) -> ListViewKernel<PersonList<G>, L> {
        ListViewKernel::new(PersonList::new(self.gateway.clone()), location)
    }

    /// Artwork with its provenance chain in sequence order.
    pub async fn artwork_detail(&self, id: RecordId) -> DetailView<Artwork> {
        let res = self.gateway.get_artwork(id).await.map(|mut art| {
            art.sort_provenance();
            art
        });
        res.into()
    }

    pub async fn person_detail(&self, id: RecordId) -> DetailView<PersonDetail> {
        self.gateway.get_person(id).await.into()
    }
}
