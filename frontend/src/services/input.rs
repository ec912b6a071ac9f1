//! Collects files from the file picker, drag & drop and paste events.

use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DataTransfer, DragEvent, Event, File, FileList, HtmlInputElement};

/// Every file of a `FileList`, in order.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Files selected in an `<input type="file">`.
pub fn files_from_input(input: &HtmlInputElement) -> Vec<File> {
    input.files().map(|list| files_from_list(&list)).unwrap_or_default()
}

/// Files dropped on the drop zone.
pub fn files_from_drop(event: &DragEvent) -> Vec<File> {
    event
        .data_transfer()
        .and_then(|transfer| transfer.files())
        .map(|list| files_from_list(&list))
        .unwrap_or_default()
}

/// Files pasted with Ctrl+V. Non-file clipboard items (plain text, ...) are ignored.
///
/// Takes the plain `Event` handed out by the window `paste` listener.
pub fn files_from_paste(event: &Event) -> Vec<File> {
    event
        .dyn_ref::<ClipboardEvent>()
        .and_then(ClipboardEvent::clipboard_data)
        .map(|data| pasted_files(&data))
        .unwrap_or_default()
}

fn pasted_files(data: &DataTransfer) -> Vec<File> {
    let items = data.items();
    (0..items.length())
        .filter_map(|i| items.get(i))
        .filter(|item| item.kind() == "file")
        .filter_map(|item| item.get_as_file().ok().flatten())
        .collect()
}
