use leptos::prelude::*;

use crate::shared::components::PageHeader;

#[component]
pub fn KnowledgeBasePage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Knowledge Base">
                <></>
            </PageHeader>

            <div class="kb-articles">
                <div class="kb-article">
                    <h3>"Capturing leads at the stand"</h3>
                    <p>
                        "Scan a visitor badge from the capture screen, rate the "
                        "conversation and the contact lands in your lead inbox "
                        "immediately."
                    </p>
                </div>
                <div class="kb-article">
                    <h3>"Where did my selection go?"</h3>
                    <p>
                        "Moving up a level discards the deeper selections: opening "
                        "an event dashboard drops the selected company and staff "
                        "member. Use the breadcrumb trail to jump back."
                    </p>
                </div>
                <div class="kb-article">
                    <h3>"Exporting leads"</h3>
                    <p>
                        "Exports are prepared per company after the event closes "
                        "and delivered to the company admin by email."
                    </p>
                </div>
            </div>
        </div>
    }
}
