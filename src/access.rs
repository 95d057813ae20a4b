//! Política de lectura de jobs. No autentica: sólo decide el camino 403.
use crate::catalog::CatalogJob;

pub trait AccessPolicy: Send + Sync {
    fn can_read(&self, job: &CatalogJob) -> bool;
}

/// Niega la lectura de los jobs marcados `restricted` en el catálogo.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogAccessPolicy;

impl AccessPolicy for CatalogAccessPolicy {
    fn can_read(&self, job: &CatalogJob) -> bool {
        !job.restricted
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn can_read(&self, _job: &CatalogJob) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn restricted_jobs_are_denied_by_catalog_policy() {
        let catalog = Catalog::from_json_str(r#"{"jobs":[{"fullName":"open"},{"fullName":"locked","restricted":true}]}"#).unwrap();
        let open = catalog.get("open").unwrap();
        let locked = catalog.get("locked").unwrap();
        assert!(CatalogAccessPolicy.can_read(open));
        assert!(!CatalogAccessPolicy.can_read(locked));
        assert!(AllowAll.can_read(locked));
    }
}
