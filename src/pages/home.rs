use yew::prelude::*;

use crate::pages::about::{About, IAm};
use crate::pages::categories::Categories;
use crate::pages::contact::Contact;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::working_together::{
    HiringReasons, ProcessDetail, WorkingTogetherBanner, WorkingTogetherCarousel,
};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Categories />
            <Contact />
            <IAm />
            <About />
            <WorkingTogetherBanner />
            <WorkingTogetherCarousel />
            <ProcessDetail />
            <HiringReasons />
            <Footer />
        </>
    }
}
