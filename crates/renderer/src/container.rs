//! Locating the chart container in the document

use trackstats_shared::ContainerLocator;

/// Document that chart containers are looked up in
pub trait ContainerHost {
    type Element;

    /// First element matching `locator`, if any
    fn find(&self, locator: &ContainerLocator) -> Option<Self::Element>;
}

impl<H: ContainerHost + ?Sized> ContainerHost for &H {
    type Element = H::Element;

    fn find(&self, locator: &ContainerLocator) -> Option<Self::Element> {
        (**self).find(locator)
    }
}
