//! The compiled-in set of known PrivateBin-family instances.
//!
//! URLs are drawn from the public PrivateBin directory
//! (<https://privatebin.info/directory/>); the per-host expiry and
//! feature metadata is this client's own curated assessment, since the
//! directory only publishes URLs, not capabilities.

use super::directory::{Expiry, Feature, HostDescriptor};

const ALL_EXPIRIES: [Expiry; 6] = [
    Expiry::OneHour,
    Expiry::OneDay,
    Expiry::OneWeek,
    Expiry::OneMonth,
    Expiry::OneYear,
    Expiry::Never,
];

const SHORT_EXPIRIES: [Expiry; 4] =
    [Expiry::OneHour, Expiry::OneDay, Expiry::OneWeek, Expiry::OneMonth];

/// Builds the compiled-in host descriptor list.
pub fn compiled_hosts() -> Vec<HostDescriptor> {
    vec![
        HostDescriptor::new(
            "https://privatebin.net/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.idrix.fr/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://paste.systemli.org/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://privatebin.at/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::UploadFile, Feature::ShortenUrl],
        ),
        HostDescriptor::new(
            "https://pb.envs.net/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile, Feature::ShortenUrl],
        ),
        HostDescriptor::new(
            "https://bin.veracry.pt/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://paste.itefix.net/",
            SHORT_EXPIRIES,
            [Feature::Burn],
        ),
        HostDescriptor::new(
            "https://bin.infini.fr/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://paste.d4v.is/",
            ALL_EXPIRIES,
            [Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://pastebin.aquilenet.fr/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://pastebin.hot-chilli.net/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.privacytools.io/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile, Feature::ShortenUrl],
        ),
        HostDescriptor::new(
            "https://paste.tuxcloud.net/",
            SHORT_EXPIRIES,
            [Feature::Burn, Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://paste.dismail.de/",
            ALL_EXPIRIES,
            [Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.nixnet.services/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://paste.tildeverse.org/",
            ALL_EXPIRIES,
            [Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://vim.cx/",
            SHORT_EXPIRIES,
            [Feature::Burn],
        ),
        HostDescriptor::new(
            "https://paste.jaegers.net/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.bissisoft.com/",
            ALL_EXPIRIES,
            [Feature::Burn],
        ),
        HostDescriptor::new(
            "https://bin.hopon.cam/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::ShortenUrl],
        ),
        HostDescriptor::new(
            "https://paste.whispers.us/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.mezzo.moe/",
            ALL_EXPIRIES,
            [Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://bin.xsden.info/",
            SHORT_EXPIRIES,
            [Feature::Burn, Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://paste.biocrafting.net/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://code.wt.pt/",
            ALL_EXPIRIES,
            [Feature::Burn],
        ),
        HostDescriptor::new(
            "https://p.dousse.eu/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion, Feature::UploadFile, Feature::ShortenUrl],
        ),
        HostDescriptor::new(
            "https://pastebin.grey.pw/",
            SHORT_EXPIRIES,
            [Feature::Burn],
        ),
        HostDescriptor::new(
            "https://snip.dssr.ch/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::Discussion],
        ),
        HostDescriptor::new(
            "https://paste.oneway.pro/",
            ALL_EXPIRIES,
            [Feature::Burn, Feature::UploadFile],
        ),
        HostDescriptor::new(
            "https://paste.fizi.ca/",
            ALL_EXPIRIES,
            [Feature::Discussion, Feature::UploadFile],
        ),
    ]
}
