use yew::prelude::*;

#[function_component(Partnership)]
pub fn partnership() -> Html {
    html! {
        <section id="partnership" class="page partnership">
            <div class="container">
                <div class="section-header animate-on-scroll">
                    <h1>{"Partner With Us"}</h1>
                    <p>{"We work with vendors, MSPs and local agencies who care about doing the job right."}</p>
                </div>
                <div class="partnership-grid">
                    <article class="partnership-card animate-on-scroll">
                        <h3>{"Referral partners"}</h3>
                        <p>{"Send us clients who need IT help and share in the relationship."}</p>
                    </article>
                    <article class="partnership-card animate-on-scroll">
                        <h3>{"Technology partners"}</h3>
                        <p>{"Vendors whose products we can install and support with confidence."}</p>
                    </article>
                    <article class="partnership-card animate-on-scroll">
                        <h3>{"Overflow work"}</h3>
                        <p>{"Other providers who need extra hands for cabling or on-site projects."}</p>
                    </article>
                </div>
                <a href="/#contact" class="btn btn-primary">{"Start a conversation"}</a>
            </div>
        </section>
    }
}
