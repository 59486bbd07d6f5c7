//! PDF file picker

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    pub disabled: bool,
    pub on_file: EventHandler<(String, Vec<u8>)>,
}

/// Plain file-input wrapper; hands the chosen file's name and bytes to
/// the parent.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    rsx! {
        label {
            class: "upload-box",
            input {
                r#type: "file",
                accept: ".pdf,application/pdf",
                disabled: props.disabled,
                onchange: move |evt| async move {
                    let Some(file_engine) = evt.files() else {
                        return;
                    };
                    let Some(name) = file_engine.files().first().cloned() else {
                        return;
                    };
                    if let Some(bytes) = file_engine.read_file(&name).await {
                        props.on_file.call((name, bytes));
                    }
                },
            }
            span { class: "upload-title", "Choose a PDF" }
            span { class: "upload-hint", "The extractor reads every table and the full document text." }
        }
    }
}
