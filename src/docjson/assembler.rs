//! Builds DocJSON documents from a snapshot of notes.
//!
//! Everything here is pure: the caller loads the [`NoteView`] and parses the
//! [`QueryState`]; the assembler only decides which affordances to advertise
//! and where they point.

use crate::{
    config::DocumentProfile,
    notes::{pagination::Page, query::QueryState, repo::Note, service::NoteView},
};

use super::{
    document::{Document, Field, Kind, Link, Meta, NoteItem, NoteList, Notes, Tabs, Verb},
    links::Links,
};

pub const TITLE_PREFIX: &str = "DocJSON ToDo API";

pub struct Assembler<'a> {
    profile: DocumentProfile,
    query: &'a QueryState,
    links: &'a Links,
}

impl<'a> Assembler<'a> {
    pub fn new(profile: DocumentProfile, query: &'a QueryState, links: &'a Links) -> Self {
        Self {
            profile,
            query,
            links,
        }
    }

    pub fn document(&self, view: &NoteView) -> Document {
        let suffix = self.query.suffix();

        let (search, notes) = match self.profile {
            DocumentProfile::Flat => (
                None,
                Notes::All(view.notes.iter().map(|n| self.note_item(n)).collect()),
            ),
            DocumentProfile::Paginated => (
                Some(Link::form(
                    self.links.root(),
                    Verb::Get,
                    vec![Field::required("term")],
                )),
                Notes::Page(self.note_list(view)),
            ),
        };

        Document {
            kind: Kind::Document,
            meta: Meta {
                url: self.links.absolute(&format!("{}{suffix}", self.links.root())),
                title: title(view.count, self.query.completed),
            },
            tabs: Tabs {
                all: Link::to(self.links.root()),
                complete: Link::to(self.links.filtered_root(true)),
                incomplete: Link::to(self.links.filtered_root(false)),
            },
            search,
            create_note: Link::action(
                self.with_preserved_query(self.links.root()),
                Verb::Post,
                vec![Field::required("text"), Field::optional("completed")],
            ),
            notes,
        }
    }

    /// The list fragment for the view's page. A view loaded without
    /// pagination is presented as a single page.
    pub fn note_list(&self, view: &NoteView) -> NoteList {
        let page = view.page.unwrap_or(Page {
            number: 1,
            per_page: view.count.max(1),
            count: view.count,
            num_pages: 1,
        });

        let next = page
            .has_next()
            .then(|| Link::to(self.links.list_page(&self.query.page_query(page.number + 1))));
        let previous = page
            .has_previous()
            .then(|| Link::to(self.links.list_page(&self.query.page_query(page.number - 1))));

        NoteList {
            kind: Kind::List,
            items: view.notes.iter().map(|n| self.note_item(n)).collect(),
            page: page.number,
            num_pages: page.num_pages,
            count: page.count,
            next,
            previous,
        }
    }

    fn note_item(&self, note: &Note) -> NoteItem {
        let url = self.with_preserved_query(self.links.item(note.id));
        let edit_method = match self.profile {
            DocumentProfile::Flat => Verb::Patch,
            DocumentProfile::Paginated => Verb::Put,
        };

        NoteItem {
            text: note.text.clone(),
            completed: note.completed,
            edit: Link::action(
                url.clone(),
                edit_method,
                vec![Field::optional("text"), Field::optional("completed")],
            ),
            delete: Link::action(url, Verb::Delete, Vec::new()),
        }
    }

    fn with_preserved_query(&self, url: String) -> String {
        match self.profile {
            DocumentProfile::Flat => url + &self.query.suffix(),
            DocumentProfile::Paginated => url,
        }
    }
}

/// `DocJSON ToDo API (3 incomplete notes)`, `DocJSON ToDo API (1 note)`, ...
pub fn title(count: usize, completed: Option<bool>) -> String {
    let state = match completed {
        Some(true) => "complete ",
        Some(false) => "incomplete ",
        None => "",
    };
    let plural = if count == 1 { "" } else { "s" };

    format!("{TITLE_PREFIX} ({count} {state}note{plural})")
}
